//! Integration tests for the `apisum` binary.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MODEL: &str = include_str!("../../core/tests/fixtures/pets-compact.jsonld");

fn apisum() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("apisum"));
    for var in ["APISUM_FORMAT", "APISUM_BASE_URI", "APISUM_REARRANGE", "APISUM_TITLE_LEVEL"] {
        cmd.env_remove(var);
    }
    cmd
}

fn model_file() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.jsonld");
    fs::write(&path, MODEL).unwrap();
    (dir, path)
}

#[test]
fn html_is_the_default_format() {
    let (_dir, path) = model_file();
    apisum()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<div class=\"api-summary\">"))
        .stdout(predicate::str::contains("class=\"api-title\""))
        .stdout(predicate::str::contains("Store</span>"));
}

#[test]
fn text_format_reads_stdin() {
    apisum()
        .args(["-", "--format", "text"])
        .write_stdin(MODEL)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pet Store  v1.2\n"))
        .stdout(predicate::str::contains("Endpoints (3)"));
}

#[test]
fn json_format_with_rearrange_and_base_uri() {
    let (_dir, path) = model_file();
    let out = apisum()
        .arg(&path)
        .args(["--format", "json", "--rearrange", "--base-uri", "http://localhost:9000/"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let view: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(view["servers"][0]["url"], "http://localhost:9000");
    assert_eq!(endpoint_paths(&out.stdout), vec!["/pets", "/pets/{petId}", "/owners"]);
}

#[test]
fn environment_supplies_defaults() {
    let (_dir, path) = model_file();
    apisum()
        .arg(&path)
        .env("APISUM_FORMAT", "html")
        .env("APISUM_TITLE_LEVEL", "5")
        .assert()
        .success()
        .stdout(predicate::str::contains("aria-level=\"5\""));
}

fn endpoint_paths(stdout: &[u8]) -> Vec<String> {
    let view: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    view["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn rearrange_from_environment_can_be_turned_off() {
    let (_dir, path) = model_file();
    let on = apisum()
        .arg(&path)
        .args(["--format", "json"])
        .env("APISUM_REARRANGE", "yes")
        .output()
        .unwrap();
    assert!(on.status.success());
    assert_eq!(endpoint_paths(&on.stdout), vec!["/pets", "/pets/{petId}", "/owners"]);

    let off = apisum()
        .arg(&path)
        .args(["--format", "json", "--rearrange=false"])
        .env("APISUM_REARRANGE", "yes")
        .output()
        .unwrap();
    assert!(off.status.success());
    assert_eq!(endpoint_paths(&off.stdout), vec!["/pets/{petId}", "/owners", "/pets"]);
}

#[test]
fn base_uri_flag_beats_environment() {
    let (_dir, path) = model_file();
    let out = apisum()
        .arg(&path)
        .args(["--format", "json", "--base-uri", "http://flag.test"])
        .env("APISUM_BASE_URI", "http://env.test")
        .output()
        .unwrap();
    assert!(out.status.success());
    let view: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(view["servers"][0]["url"], "http://flag.test");
}

#[test]
fn out_of_range_title_level_is_clamped() {
    let (_dir, path) = model_file();
    apisum()
        .arg(&path)
        .args(["--title-level", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aria-level=\"6\""));
}

#[test]
fn invalid_json_exits_with_2() {
    apisum()
        .arg("-")
        .write_stdin("{ nope")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("apisum: model is not valid JSON"));
}

#[test]
fn missing_file_exits_with_2() {
    apisum()
        .arg("/definitely/not/here.jsonld")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn model_without_api_still_succeeds() {
    apisum()
        .args(["-", "--format", "json"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

//! `apisum`: print the summary of a Web API model.
//!
//! Reads an AMF JSON-LD model from a file or stdin (`-`) and prints its
//! summary in one of three formats:
//!
//! - **`html`**: the summary widget's sanitized markup (default).
//! - **`text`**: a plain-text overview for terminals.
//! - **`json`**: the view-model itself.
//!
//! Every option can also be set through an `APISUM_*` environment variable;
//! a flag on the command line wins over the environment.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use api_summary::{build, render_html, render_text, JsonLdGraph, SummaryConfig};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

/// apisum: Web API summary
///
/// Summarise an AMF JSON-LD model: title, version, servers, contact,
/// license, and the endpoint table of contents.
#[derive(Parser)]
#[command(name = "apisum", version, about, long_about = None)]
struct Cli {
    /// Path to an AMF JSON-LD file, or `-` for stdin.
    file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html, env = "APISUM_FORMAT")]
    format: Format,

    /// Use this base URI instead of the one computed from the model's servers.
    #[arg(long, value_name = "URI", env = "APISUM_BASE_URI")]
    base_uri: Option<String>,

    /// Group endpoints by first path segment and sort each group by path.
    ///
    /// `--rearrange` alone turns it on; `--rearrange=false` turns it off.
    #[arg(
        long,
        value_name = "BOOL",
        env = "APISUM_REARRANGE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
    )]
    rearrange: Option<bool>,

    /// Heading level of the API title (1–6; other values are clamped).
    #[arg(long, value_name = "N", env = "APISUM_TITLE_LEVEL")]
    title_level: Option<u8>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_summary=info,apisum=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let defaults = SummaryConfig::default();
    let config = SummaryConfig {
        base_uri: cli.base_uri,
        rearrange_endpoints: cli.rearrange.unwrap_or(defaults.rearrange_endpoints),
        title_level: cli.title_level.unwrap_or(defaults.title_level),
        ..defaults
    };

    let json = read_input(&cli.file);
    let graph = JsonLdGraph::from_json(&json).unwrap_or_else(|e| fatal(&e.to_string()));

    let view = build(&graph, &config);
    if view.is_empty() {
        tracing::warn!("{}: no API found in model", cli.file.display());
    }

    match cli.format {
        Format::Html => print!("{}", render_html(&view, &config)),
        Format::Text => print!("{}", render_text(&view)),
        Format::Json => match serde_json::to_string_pretty(&view) {
            Ok(out) => println!("{out}"),
            Err(e) => fatal(&format!("failed to serialise view-model: {e}")),
        },
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        tracing::debug!("reading model from {}", path.display());
        fs::read_to_string(path).unwrap_or_else(|e| {
            fatal(&format!("failed to read {}: {}", path.display(), e))
        })
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("apisum: {}", msg);
    process::exit(2);
}

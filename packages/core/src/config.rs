//! Summary configuration.

use serde::{Deserialize, Serialize};

/// Default heading level of the API title.
pub const DEFAULT_TITLE_LEVEL: u8 = 2;

/// User-supplied options for building and rendering a summary.
///
/// Deserialises from the camelCase option object a browser host passes in
/// (`{"baseUri": "...", "rearrangeEndpoints": true, "titleLevel": 3}`).
/// Missing keys take their defaults.
///
/// For native hosts, [`SummaryConfig::from_env`] reads the same options from
/// environment variables. The aware scope has no variable: it only means
/// something to a host that keeps an
/// [`AwareRegistry`](crate::aware::AwareRegistry).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `APISUM_BASE_URI` | (absent) | Replaces the base URI computed from the model's servers |
/// | `APISUM_REARRANGE` | `false` | Group and sort endpoints by first path segment |
/// | `APISUM_TITLE_LEVEL` | `2` | Heading level of the API title (1–6) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryConfig {
    /// Scope in an [`AwareRegistry`](crate::aware::AwareRegistry) to take the
    /// model from, instead of having it assigned directly.
    #[serde(alias = "aware")]
    pub aware_scope: Option<String>,

    /// Overrides the base URI computed from the model's servers.
    pub base_uri: Option<String>,

    /// Run the endpoint list through [`arrange`](crate::arrange::arrange).
    pub rearrange_endpoints: bool,

    /// Heading level of the API title. Values outside 1–6 are clamped when
    /// rendering, never rejected.
    pub title_level: u8,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            aware_scope: None,
            base_uri: None,
            rearrange_endpoints: false,
            title_level: DEFAULT_TITLE_LEVEL,
        }
    }
}

impl SummaryConfig {
    /// Populate config from environment variables, applying defaults where
    /// absent. Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.base_uri = lookup("APISUM_BASE_URI").filter(|s| !s.trim().is_empty());

        if let Some(raw) = lookup("APISUM_REARRANGE") {
            match parse_flag(&raw) {
                Some(flag) => config.rearrange_endpoints = flag,
                None => tracing::warn!("ignoring APISUM_REARRANGE={raw:?}: expected a boolean"),
            }
        }

        if let Some(raw) = lookup("APISUM_TITLE_LEVEL") {
            match raw.trim().parse::<u8>() {
                Ok(level) => config.title_level = level,
                Err(_) => tracing::warn!("ignoring APISUM_TITLE_LEVEL={raw:?}: expected 1-6"),
            }
        }

        config
    }

    /// The title level clamped to a valid heading level.
    pub fn heading_level(&self) -> u8 {
        self.title_level.clamp(1, 6)
    }

    /// The base URI override, if one is set and not blank.
    pub fn base_uri_override(&self) -> Option<&str> {
        self.base_uri.as_deref().filter(|s| !s.trim().is_empty())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let c = SummaryConfig::default();
        assert_eq!(c.title_level, 2);
        assert!(!c.rearrange_endpoints);
        assert_eq!(c.base_uri_override(), None);
    }

    #[test]
    fn heading_level_is_clamped() {
        let mut c = SummaryConfig::default();
        c.title_level = 0;
        assert_eq!(c.heading_level(), 1);
        c.title_level = 9;
        assert_eq!(c.heading_level(), 6);
        c.title_level = 4;
        assert_eq!(c.heading_level(), 4);
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let c = SummaryConfig::from_lookup(lookup_from(&[
            ("APISUM_BASE_URI", "https://api.example.com/"),
            ("APISUM_REARRANGE", "yes"),
            ("APISUM_TITLE_LEVEL", "3"),
        ]));
        assert_eq!(c.aware_scope, None);
        assert_eq!(c.base_uri.as_deref(), Some("https://api.example.com/"));
        assert!(c.rearrange_endpoints);
        assert_eq!(c.title_level, 3);
    }

    #[test]
    fn from_lookup_ignores_garbage() {
        let c = SummaryConfig::from_lookup(lookup_from(&[
            ("APISUM_BASE_URI", "  "),
            ("APISUM_REARRANGE", "maybe"),
            ("APISUM_TITLE_LEVEL", "high"),
        ]));
        assert_eq!(c, SummaryConfig::default());
    }

    #[test]
    fn deserialises_camel_case_options() {
        let c: SummaryConfig =
            serde_json::from_str(r#"{"aware":"s","rearrangeEndpoints":true,"titleLevel":5}"#)
                .unwrap();
        assert_eq!(c.aware_scope.as_deref(), Some("s"));
        assert!(c.rearrange_endpoints);
        assert_eq!(c.title_level, 5);
        assert_eq!(c.base_uri, None);
    }
}

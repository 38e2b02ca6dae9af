//! Base URI computation for API servers.

use std::sync::LazyLock;

use regex::Regex;

/// `^[A-Za-z][A-Za-z0-9+.-]*://`
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("invalid scheme regex")
});

/// Compute the base URI shown for a server.
///
/// A non-blank `base_uri` override wins and is used as given. Otherwise the
/// server's URL template is used; when it carries no scheme, the first
/// declared protocol (lowercased) is prepended, falling back to `http`.
/// One trailing `/` is removed from the result.
///
/// Returns `None` when neither source yields a value.
pub fn compute_base_uri(
    server_url: Option<&str>,
    base_uri: Option<&str>,
    protocols: &[String],
) -> Option<String> {
    let base = match base_uri.filter(|s| !s.trim().is_empty()) {
        Some(over) => over.to_string(),
        None => ensure_scheme(server_url.filter(|s| !s.trim().is_empty())?, protocols),
    };
    let base = base.strip_suffix('/').map(str::to_string).unwrap_or(base);
    (!base.is_empty()).then_some(base)
}

/// Prefix `url` with a scheme unless it already has one.
pub fn ensure_scheme(url: &str, protocols: &[String]) -> String {
    if SCHEME_RE.is_match(url) {
        return url.to_string();
    }
    let scheme = protocols
        .first()
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "http".to_string());
    format!("{scheme}://{url}")
}

//! Sanitization of model-sourced strings before they become markup.
//!
//! Model content is untrusted. Plain text is escaped with
//! [`ammonia::clean_text`].
//! Links assembled from model URLs go through a sanitizer that keeps nothing
//! but `<a href target>`. Markdown is rendered and then cleaned with
//! ammonia's default policy.

use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::{clean_text, Builder};
use pulldown_cmark::{html, Options, Parser};

/// Allows only anchors with `href` and `target`, over `http`, `https`,
/// `mailto`, or relative URLs.
static LINK_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .add_tags(&["a"])
        .add_tag_attributes("a", &["href", "target"])
        .url_schemes(HashSet::from(["http", "https", "mailto"]))
        .link_rel(Some("noopener noreferrer"))
        .clean_content_tags(HashSet::from(["script", "style"]));
    builder
});

/// Percent-encode the characters that may not appear literally in a URL
/// attribute.
pub fn encode_href(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.trim().chars() {
        match c {
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '`' => out.push_str("%60"),
            ' ' => out.push_str("%20"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Pass raw markup through the link-only sanitizer.
pub fn sanitize_link_html(markup: &str) -> String {
    LINK_SANITIZER.clean(markup).to_string()
}

/// Build a sanitized external link (`target="_blank"`).
pub fn external_link(url: &str, text: &str) -> String {
    let markup = format!(
        r#"<a href="{}" target="_blank">{}</a>"#,
        clean_text(&encode_href(url)),
        clean_text(text),
    );
    sanitize_link_html(&markup)
}

/// Render Markdown to HTML and clean the result.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut raw = String::new();
    html::push_html(&mut raw, Parser::new_ext(markdown, options));
    ammonia::clean(&raw)
}

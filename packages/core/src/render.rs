//! Rendering of a [`ViewModel`] as an HTML fragment or as plain text.
//!
//! The HTML output is the summary widget's markup: sections without data are
//! left out entirely, all text is escaped, and the only raw markup built from
//! model strings (contact and license links) goes through the link
//! sanitizer. Endpoint and method links carry `data-id` and
//! `data-shape-type` so a host can turn clicks into
//! [`NavigationEvent`](crate::navigation::NavigationEvent)s.
//!
//! The text output is meant for terminals and logs. It is not a stable format.

use crate::config::SummaryConfig;
use ammonia::clean_text;

use crate::sanitize::{encode_href, external_link, render_markdown};
use crate::types::{EndpointView, OperationView, ServerView, ViewModel};

/// Render the summary as an HTML fragment.
///
/// ```text
/// <div class="api-summary">
///   <div class="api-title" role="heading" aria-level="2">…</div>
///   <p class="inline-description version">…</p>
///   …
/// </div>
/// <div class="separator"></div>
/// <div class="toc">…</div>
/// ```
pub fn render_html(view: &ViewModel, config: &SummaryConfig) -> String {
    let mut out = String::from("<div class=\"api-summary\">\n");
    out.push_str(&title_html(view, config.heading_level()));
    out.push_str(&version_html(view));
    out.push_str(&description_html(view));
    out.push_str(&servers_html(&view.servers));
    out.push_str(&protocols_html(&view.protocols));
    out.push_str(&contact_html(view));
    out.push_str(&license_html(view));
    out.push_str(&terms_html(view));
    out.push_str("</div>\n");
    out.push_str(&endpoints_html(&view.endpoints));
    out
}

fn title_html(view: &ViewModel, level: u8) -> String {
    let Some(title) = &view.title else {
        return String::new();
    };
    format!(
        "<div class=\"api-title\" role=\"heading\" aria-level=\"{}\">\
         <label>API title:</label> <span>{}</span></div>\n",
        level,
        clean_text(title)
    )
}

fn version_html(view: &ViewModel) -> String {
    let Some(version) = &view.version else {
        return String::new();
    };
    format!(
        "<p class=\"inline-description version\"><label>Version:</label> <span>{}</span></p>\n",
        clean_text(version)
    )
}

fn description_html(view: &ViewModel) -> String {
    let Some(description) = &view.description else {
        return String::new();
    };
    format!(
        "<div role=\"region\" class=\"marked-description\">\
         <div class=\"markdown-body\">{}</div></div>\n",
        render_markdown(description)
    )
}

fn servers_html(servers: &[ServerView]) -> String {
    match servers {
        [] => String::new(),
        [server] => format!(
            "<div class=\"url-area\"><span class=\"url-label\">API base URI</span>\
             <div class=\"url-value\">{}</div></div>\n",
            clean_text(&server.url)
        ),
        many => {
            let mut out = String::from(
                "<div class=\"servers\"><p class=\"servers-label\">API servers</p>\
                 <ul class=\"server-lists\">",
            );
            for server in many {
                out.push_str(&format!("<li>{}</li>", clean_text(&server.url)));
            }
            out.push_str("</ul></div>\n");
            out
        }
    }
}

fn protocols_html(protocols: &[String]) -> String {
    if protocols.is_empty() {
        return String::new();
    }
    let chips: String = protocols
        .iter()
        .map(|p| format!("<span class=\"chip\">{}</span>", clean_text(p)))
        .collect();
    format!(
        "<label class=\"section\">Supported protocols</label>\
         <div class=\"protocol-chips\">{chips}</div>\n"
    )
}

fn contact_html(view: &ViewModel) -> String {
    let Some(name) = &view.provider_name else {
        return String::new();
    };
    let mut out = String::from(
        "<section role=\"contentinfo\" class=\"docs-section\">\
         <label class=\"section\">Contact information</label>",
    );
    out.push_str(&format!(
        "<p class=\"inline-description\"><span class=\"provider-name\">{}</span>",
        clean_text(name)
    ));
    if let Some(email) = &view.provider_email {
        out.push_str(&format!(
            " <a class=\"app-link link-padding provider-email\" href=\"mailto:{}\">{}</a>",
            clean_text(&encode_href(email)),
            clean_text(email)
        ));
    }
    out.push_str("</p>");
    if let Some(url) = &view.provider_url {
        out.push_str(&format!(
            "<p class=\"inline-description provider-url\">{}</p>",
            external_link(url, &encode_href(url))
        ));
    }
    out.push_str("</section>\n");
    out
}

fn license_html(view: &ViewModel) -> String {
    let (Some(name), Some(url)) = (&view.license_name, &view.license_url) else {
        return String::new();
    };
    format!(
        "<section role=\"region\" aria-labelledby=\"licenseLabel\" class=\"docs-section\">\
         <label class=\"section\" id=\"licenseLabel\">License</label>\
         <p class=\"inline-description\">{}</p></section>\n",
        external_link(url, name)
    )
}

fn terms_html(view: &ViewModel) -> String {
    let Some(terms) = &view.terms_of_service else {
        return String::new();
    };
    format!(
        "<section role=\"region\" aria-labelledby=\"tocLabel\" class=\"docs-section\">\
         <label class=\"section\" id=\"tocLabel\">Terms of service</label>\
         <div class=\"markdown-body\">{}</div></section>\n",
        render_markdown(terms)
    )
}

fn endpoints_html(endpoints: &[EndpointView]) -> String {
    if endpoints.is_empty() {
        return String::new();
    }
    let mut out = String::from(
        "<div class=\"separator\"></div>\n<div class=\"toc\">\
         <label class=\"section endpoints-title\">API endpoints</label>\n",
    );
    for endpoint in endpoints {
        out.push_str(&endpoint_html(endpoint));
    }
    out.push_str("</div>\n");
    out
}

fn endpoint_html(endpoint: &EndpointView) -> String {
    let path = clean_text(&endpoint.path);
    let href = clean_text(&encode_href(&endpoint.path));
    let mut out = String::from("<div class=\"endpoint-item\">");

    let label = endpoint.name.as_deref().map(clean_text);
    out.push_str(&format!(
        "<a class=\"endpoint-path\" href=\"#{}\"{} data-shape-type=\"endpoint\" \
         title=\"Open endpoint documentation\">{}</a>",
        href,
        data_id(endpoint.id.as_deref()),
        label.as_deref().unwrap_or(&path)
    ));
    if label.is_some() {
        out.push_str(&format!("<p class=\"endpoint-path-name\">{path}</p>"));
    }

    out.push_str("<div class=\"endpoint-header\">");
    for op in &endpoint.operations {
        out.push_str(&method_html(op, &endpoint.path));
    }
    out.push_str("</div></div>\n");
    out
}

fn method_html(op: &OperationView, path: &str) -> String {
    let Some(method) = &op.method else {
        return String::new();
    };
    let method_text = clean_text(method);
    format!(
        "<a href=\"#{}\" class=\"method-label\" data-method=\"{}\"{} data-shape-type=\"method\" \
         title=\"Open method documentation\">{}</a>",
        clean_text(&encode_href(&format!("{path}/{method}"))),
        method_text,
        data_id(op.id.as_deref()),
        method_text
    )
}

fn data_id(id: Option<&str>) -> String {
    id.map(|id| format!(" data-id=\"{}\"", clean_text(id)))
        .unwrap_or_default()
}

/// Render the summary as plain text.
///
/// ```text
/// Pets  v2
/// ────────
/// A pet store API.
///
/// Base URI: https://api.example.com/v1
/// Protocols: HTTPS
///
/// Contact: Pet Co <api@example.com>  https://example.com
/// License: MIT  https://opensource.org/licenses/MIT
///
/// Endpoints (2)
///   /pets            get post
///   Pet  /pets/{id}  get delete
/// ```
pub fn render_text(view: &ViewModel) -> String {
    let header = match (&view.title, &view.version) {
        (Some(t), Some(v)) => format!("{t}  {v}"),
        (Some(t), None) => t.clone(),
        (None, Some(v)) => format!("(untitled API)  {v}"),
        (None, None) => "(untitled API)".to_string(),
    };
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{header}\n{rule}\n");

    if let Some(description) = &view.description {
        out.push_str(description.trim());
        out.push('\n');
    }

    // servers and protocols
    let mut block = String::new();
    match view.servers.as_slice() {
        [] => {}
        [server] => block.push_str(&format!("Base URI: {}\n", server.url)),
        many => {
            block.push_str("Servers:\n");
            for s in many {
                block.push_str(&format!("  • {}\n", s.url));
            }
        }
    }
    if !view.protocols.is_empty() {
        block.push_str(&format!("Protocols: {}\n", view.protocols.join(", ")));
    }
    push_block(&mut out, &block);

    // contact and license
    let mut block = String::new();
    if let Some(name) = &view.provider_name {
        block.push_str(&format!("Contact: {name}"));
        if let Some(email) = &view.provider_email {
            block.push_str(&format!(" <{email}>"));
        }
        if let Some(url) = &view.provider_url {
            block.push_str(&format!("  {url}"));
        }
        block.push('\n');
    }
    if let (Some(name), Some(url)) = (&view.license_name, &view.license_url) {
        block.push_str(&format!("License: {name}  {url}\n"));
    }
    push_block(&mut out, &block);

    if let Some(terms) = &view.terms_of_service {
        let mut block = String::from("Terms of service:\n");
        for line in terms.trim().lines() {
            block.push_str(&format!("  {line}\n"));
        }
        push_block(&mut out, &block);
    }

    if !view.endpoints.is_empty() {
        let labels: Vec<String> = view
            .endpoints
            .iter()
            .map(|e| match &e.name {
                Some(name) => format!("{name}  {}", e.path),
                None => e.path.clone(),
            })
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut block = format!("Endpoints ({})\n", view.endpoints.len());
        for (label, endpoint) in labels.iter().zip(&view.endpoints) {
            let methods: Vec<&str> = endpoint
                .operations
                .iter()
                .filter_map(|op| op.method.as_deref())
                .collect();
            let line = format!("  {label:<width$}  {}", methods.join(" "));
            block.push_str(line.trim_end());
            block.push('\n');
        }
        push_block(&mut out, &block);
    }

    out
}

// --- helpers -----------------------------------------------------------------

fn push_block(out: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(block);
}

// --- tests -------------------------------------------------------------------

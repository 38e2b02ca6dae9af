//! Summary view of a Web API described by an AMF JSON-LD model.
//!
//! This crate turns a semantic API model into a flat, render-ready
//! [`ViewModel`] (title, version, description, servers, protocols, contact,
//! license, terms of service, endpoints and their methods) and renders it as
//! a sanitized HTML fragment or as plain text. It is the foundation for the
//! `apisum` CLI and the `api-summary-wasm` browser bindings.
//!
//! The crate does no I/O. Fetching and parsing the API description is the
//! host's job; so is turning [`NavigationEvent`]s into actual navigation.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vocab`] | AMF vocabulary terms |
//! | [`graph`] | [`GraphAccessor`] queries and the [`JsonLdGraph`] implementation |
//! | [`builder`] | View-model derivation via [`build`] |
//! | [`arrange`] | Endpoint grouping and stable sorting via [`arrange()`](arrange::arrange) |
//! | [`uri`] | Server base URI computation |
//! | [`sanitize`] | HTML escaping, link sanitization, Markdown rendering |
//! | [`render`] | HTML and text rendering of a [`ViewModel`] |
//! | [`component`] | [`SummaryComponent`]: debounced rebuilds and navigation |
//! | [`aware`] | [`AwareRegistry`] for sharing one model between summaries |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use api_summary::{build, render_html, JsonLdGraph, SummaryConfig};
//!
//! let graph = JsonLdGraph::from_json(&std::fs::read_to_string("api.jsonld")?)?;
//! let config = SummaryConfig { rearrange_endpoints: true, ..SummaryConfig::default() };
//!
//! let view = build(&graph, &config);
//! println!("{}", render_html(&view, &config));
//! ```

pub mod arrange;
pub mod aware;
pub mod builder;
pub mod component;
pub mod config;
pub mod graph;
pub mod navigation;
pub mod render;
pub mod sanitize;
pub mod types;
pub mod uri;
pub mod vocab;

pub use arrange::arrange;
pub use aware::AwareRegistry;
pub use builder::build;
pub use component::{NavigationListener, SummaryComponent};
pub use config::SummaryConfig;
pub use graph::{GraphAccessor, GraphError, JsonLdGraph};
pub use navigation::{NavigationEvent, SelectionKind, NAVIGATION_EVENT};
pub use render::{render_html, render_text};
pub use types::{EndpointView, OperationView, ServerView, ViewModel};

//! View-model types: the render-ready projection of an API model.
//!
//! A [`ViewModel`] is rebuilt in full whenever the model changes and is never
//! patched in place. Absent data is `None` or an empty list; the builder never
//! inserts an empty string to stand for "missing".
//!
//! All types serialise with camelCase keys so a browser host can consume them
//! directly.

use serde::{Deserialize, Serialize};

/// The flat summary of a Web API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Markdown source, rendered and sanitized by the presentation layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Markdown source, rendered and sanitized by the presentation layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ServerView>,

    /// Protocols as declared by the model (e.g. `"HTTPS"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointView>,
}

impl ViewModel {
    /// True when the model yielded nothing to show.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One server of the API with its computed base URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Base URI with scheme applied and the trailing `/` removed.
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An endpoint entry in the table of contents.
///
/// `path` is always present; an endpoint the model gave no path to gets `""`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationView>,
}

/// An HTTP operation on an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The HTTP verb exactly as the model spells it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

//! Navigation intents emitted when an endpoint or method link is activated.
//!
//! The summary never navigates by itself. It reports the selection and
//! leaves the actual navigation to the host.

use serde::{Deserialize, Serialize};

/// Name of the DOM event a browser host dispatches with a
/// [`NavigationEvent`] as its `detail`.
pub const NAVIGATION_EVENT: &str = "api-navigation-selection-changed";

/// What kind of model node was selected.
///
/// Serialises as a lowercase string, matching the `data-shape-type`
/// attribute in the rendered markup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    Endpoint,
    Method,
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionKind::Endpoint => write!(f, "endpoint"),
            SelectionKind::Method => write!(f, "method"),
        }
    }
}

/// Parses a [`SelectionKind`] from its `data-shape-type` string.
impl std::str::FromStr for SelectionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endpoint" => Ok(SelectionKind::Endpoint),
            "method" => Ok(SelectionKind::Method),
            _ => Err(format!(
                "unknown shape type {s:?}; expected one of: endpoint, method"
            )),
        }
    }
}

/// A navigation intent: `{"selected": "<node id>", "type": "endpoint"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationEvent {
    /// `@id` of the selected node.
    pub selected: String,

    #[serde(rename = "type")]
    pub kind: SelectionKind,
}

impl NavigationEvent {
    /// Build an event from a link's `data-id` and `data-shape-type`.
    ///
    /// Returns `None` when either is missing or blank, or the shape type is
    /// not one the summary emits.
    pub fn from_link(id: Option<&str>, shape_type: Option<&str>) -> Option<Self> {
        let selected = id.filter(|s| !s.is_empty())?;
        let kind = shape_type?.parse().ok()?;
        Some(Self {
            selected: selected.to_string(),
            kind,
        })
    }
}

//! Read-only access to an AMF JSON-LD model.
//!
//! The builder never indexes into raw JSON. It asks a [`GraphAccessor`] for
//! scalars and sub-nodes by vocabulary term, which keeps the key-compaction
//! and shape-tolerance rules in one place.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::vocab::{self, document};

/// Errors returned when a model cannot be loaded.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("model is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Typed queries over a semantic API graph.
///
/// All queries are total: an absent node, relation, or literal yields `None`
/// or an empty list, never an error.
pub trait GraphAccessor {
    /// The graph's node representation.
    type Node;

    /// The root API node (a `WebAPI` or `AsyncAPI`), if the model has one.
    fn api(&self) -> Option<&Self::Node>;

    /// The node's `@id`.
    fn id<'a>(&self, node: &'a Self::Node) -> Option<&'a str>;

    /// First literal value of `term` on `node`. Blank strings count as absent.
    fn scalar(&self, node: &Self::Node, term: &str) -> Option<String>;

    /// Every literal value of `term` on `node`, in graph order.
    fn scalars(&self, node: &Self::Node, term: &str) -> Vec<String>;

    /// Every sub-node linked from `node` through `term`, in graph order.
    ///
    /// Both a single node and a collection are accepted. Nested collections
    /// are flattened, keeping every node.
    fn nodes<'a>(&'a self, node: &'a Self::Node, term: &str) -> Vec<&'a Self::Node>;
}

/// An AMF model in JSON-LD form, either expanded (full IRIs as keys) or
/// compact (keys prefixed through `@context`).
#[derive(Debug, Clone)]
pub struct JsonLdGraph {
    root: Value,
    /// `(prefix, namespace)` pairs taken from the root `@context`.
    context: Vec<(String, String)>,
}

impl JsonLdGraph {
    /// Wrap an already-parsed model.
    ///
    /// AMF emits the document as a one-element array; the first element is
    /// used as the root in that case.
    pub fn from_value(value: Value) -> Self {
        let root = match value {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            other => other,
        };
        let context = read_context(&root);
        Self { root, context }
    }

    /// Parse a model from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// The root document node.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve `term` to the key under which `node` stores it.
    fn lookup<'a>(&self, node: &'a Value, term: &str) -> Option<&'a Value> {
        let obj = node.as_object()?;
        if let Some(v) = obj.get(term) {
            return Some(v);
        }
        self.context.iter().find_map(|(prefix, ns)| {
            if term == ns {
                return obj.get(prefix.as_str());
            }
            let local = term.strip_prefix(ns.as_str())?;
            obj.get(&format!("{prefix}:{local}"))
        })
    }

    /// Expand a possibly-compacted IRI (`prefix:local`) against the context.
    fn expand(&self, iri: &str) -> String {
        if let Some((prefix, local)) = iri.split_once(':') {
            if let Some((_, ns)) = self.context.iter().find(|(p, _)| p == prefix) {
                return format!("{ns}{local}");
            }
        }
        iri.to_string()
    }

    /// Expanded `@type` values of `node`.
    fn types(&self, node: &Value) -> Vec<String> {
        match node.get("@type") {
            Some(Value::String(t)) => vec![self.expand(t)],
            Some(Value::Array(ts)) => ts
                .iter()
                .filter_map(Value::as_str)
                .map(|t| self.expand(t))
                .collect(),
            _ => vec![],
        }
    }

    /// A node is accepted as the API node when it is typed as one, or when it
    /// carries no type information at all.
    fn is_api(&self, node: &Value) -> bool {
        if !node.is_object() {
            return false;
        }
        let types = self.types(node);
        types.is_empty() || types.iter().any(|t| vocab::API_TYPES.contains(&t.as_str()))
    }
}

impl GraphAccessor for JsonLdGraph {
    type Node = Value;

    fn api(&self) -> Option<&Value> {
        let root = &self.root;
        if self.lookup(root, document::ENCODES).is_none() {
            return self.is_api(root).then_some(root);
        }
        let encoded = self.nodes(root, document::ENCODES).into_iter().next()?;
        self.is_api(encoded).then_some(encoded)
    }

    fn id<'a>(&self, node: &'a Value) -> Option<&'a str> {
        node.get("@id").and_then(Value::as_str)
    }

    fn scalar(&self, node: &Value, term: &str) -> Option<String> {
        let value = match self.lookup(node, term)? {
            Value::Array(items) => items.first()?,
            v => v,
        };
        literal(value).filter(|s| !s.trim().is_empty())
    }

    fn scalars(&self, node: &Value, term: &str) -> Vec<String> {
        match self.lookup(node, term) {
            Some(Value::Array(items)) => items.iter().filter_map(literal).collect(),
            Some(v) => literal(v).into_iter().collect(),
            None => vec![],
        }
    }

    fn nodes<'a>(&'a self, node: &'a Value, term: &str) -> Vec<&'a Value> {
        let mut out = Vec::new();
        if let Some(value) = self.lookup(node, term) {
            collect_nodes(value, &mut out);
        }
        out
    }
}

// --- helpers -----------------------------------------------------------------

/// Every object under `value`, in document order, at any array depth.
fn collect_nodes<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(_) => out.push(value),
        Value::Array(items) => items.iter().for_each(|item| collect_nodes(item, out)),
        _ => {}
    }
}

/// A JSON-LD literal: a bare value or a `{"@value": …}` wrapper.
fn literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(obj) => obj.get("@value").and_then(literal),
        _ => None,
    }
}

fn read_context(root: &Value) -> Vec<(String, String)> {
    let Some(ctx) = root.get("@context").and_then(Value::as_object) else {
        return vec![];
    };
    ctx.iter()
        .filter(|(prefix, _)| !prefix.starts_with('@'))
        .filter_map(|(prefix, ns)| context_iri(ns).map(|ns| (prefix.clone(), ns)))
        .collect()
}

fn context_iri(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj_id(obj),
        _ => None,
    }
}

fn obj_id(obj: &Map<String, Value>) -> Option<String> {
    obj.get("@id").and_then(Value::as_str).map(str::to_string)
}

// --- tests -------------------------------------------------------------------

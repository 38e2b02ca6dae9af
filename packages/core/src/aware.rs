//! A host-owned registry that shares one model between several summaries.
//!
//! A summary configured with an `aware_scope` does not get its model
//! assigned. It picks the model up from the registry slot with that name via
//! [`SummaryComponent::sync_aware`](crate::component::SummaryComponent::sync_aware).

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::JsonLdGraph;

/// Named slots holding shared models.
#[derive(Debug, Default)]
pub struct AwareRegistry {
    scopes: HashMap<String, Arc<JsonLdGraph>>,
}

impl AwareRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `graph` in `scope`, replacing whatever was there.
    pub fn publish(&mut self, scope: impl Into<String>, graph: Arc<JsonLdGraph>) {
        let scope = scope.into();
        tracing::debug!(scope = %scope, "aware model published");
        self.scopes.insert(scope, graph);
    }

    /// Empty `scope`. Returns the model it held.
    pub fn clear(&mut self, scope: &str) -> Option<Arc<JsonLdGraph>> {
        self.scopes.remove(scope)
    }

    /// The model currently in `scope`.
    pub fn get(&self, scope: &str) -> Option<&Arc<JsonLdGraph>> {
        self.scopes.get(scope)
    }
}

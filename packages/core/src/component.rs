//! The summary component: configuration, current model, debounced rebuilds,
//! and navigation output.
//!
//! Model changes do not rebuild immediately. [`SummaryComponent::on_graph_changed`]
//! records the latest model and marks a rebuild as pending; the host calls
//! [`SummaryComponent::run_pending`] on its next idle tick. Any number of
//! notifications between two ticks collapse into one rebuild, which always
//! reads the model held at the time it runs.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::aware::AwareRegistry;
use crate::builder::build;
use crate::config::SummaryConfig;
use crate::graph::JsonLdGraph;
use crate::navigation::NavigationEvent;
use crate::render::render_html;
use crate::types::ViewModel;

/// Receives navigation intents from the summary.
pub type NavigationListener = Box<dyn FnMut(&NavigationEvent)>;

/// A single summary view.
pub struct SummaryComponent {
    config: SummaryConfig,
    graph: Option<Arc<JsonLdGraph>>,
    /// Set while a rebuild is scheduled; cleared when it runs.
    pending: bool,
    view: ViewModel,
    rebuilds: u64,
    listener: Option<NavigationListener>,
}

impl SummaryComponent {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            graph: None,
            pending: false,
            view: ViewModel::default(),
            rebuilds: 0,
            listener: None,
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Replace the configuration and schedule a rebuild.
    pub fn set_config(&mut self, config: SummaryConfig) -> bool {
        self.config = config;
        self.schedule()
    }

    /// The model the next rebuild will read.
    pub fn graph(&self) -> Option<&Arc<JsonLdGraph>> {
        self.graph.as_ref()
    }

    /// Record a new model and schedule a rebuild.
    ///
    /// Returns `true` if this call scheduled the rebuild, `false` if one was
    /// already pending and this notification was coalesced into it.
    pub fn on_graph_changed(&mut self, graph: Option<Arc<JsonLdGraph>>) -> bool {
        self.graph = graph;
        self.schedule()
    }

    fn schedule(&mut self) -> bool {
        if self.pending {
            trace!("rebuild already pending; notification coalesced");
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Idle-tick hook. Runs the pending rebuild, if any, and reports whether
    /// one ran.
    pub fn run_pending(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.view = match &self.graph {
            Some(graph) => build(&**graph, &self.config),
            None => ViewModel::default(),
        };
        self.rebuilds += 1;
        debug!(
            rebuilds = self.rebuilds,
            endpoints = self.view.endpoints.len(),
            "summary rebuilt"
        );
        true
    }

    /// The view-model produced by the last rebuild.
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// How many rebuilds have run.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Render the current view-model as HTML.
    pub fn render_html(&self) -> String {
        render_html(&self.view, &self.config)
    }

    /// Install the navigation listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(&NavigationEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Handle activation of a link with the given `data-id` and
    /// `data-shape-type`.
    ///
    /// Emits exactly one event to the listener when both are present and
    /// valid, and returns it. Otherwise emits nothing.
    pub fn select(
        &mut self,
        id: Option<&str>,
        shape_type: Option<&str>,
    ) -> Option<NavigationEvent> {
        let event = NavigationEvent::from_link(id, shape_type)?;
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
        Some(event)
    }

    /// Pick up the model from this component's aware scope.
    ///
    /// Schedules a rebuild and returns `true` only when the registry holds a
    /// different model than the component (compared by identity). Does
    /// nothing without an aware scope.
    pub fn sync_aware(&mut self, registry: &AwareRegistry) -> bool {
        let Some(scope) = self.config.aware_scope.as_deref() else {
            return false;
        };
        let latest = registry.get(scope).cloned();
        let unchanged = match (&self.graph, &latest) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }
        debug!(scope, "aware model changed");
        self.on_graph_changed(latest);
        true
    }
}

impl Default for SummaryComponent {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

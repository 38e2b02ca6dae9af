//! WebAssembly bindings for the api-summary library.
//!
//! Exposes the summary to JavaScript/TypeScript via `wasm-bindgen`. Compile
//! with `wasm-pack build` to produce an npm-ready package.
//!
//! ## One-shot API: [`build_view_model`], [`render_summary`]
//!
//! ```js
//! import init, { buildViewModel, renderSummary } from './api_summary_wasm.js';
//! await init();
//!
//! const model = await fetch('api.jsonld').then(r => r.text());   // I/O is yours
//! const view = JSON.parse(buildViewModel(model, '{"rearrangeEndpoints":true}'));
//! element.innerHTML = renderSummary(model);
//! ```
//!
//! ## Element API: [`ApiSummaryElement`]
//!
//! ```js
//! const summary = new ApiSummaryElement('{"titleLevel":3}');
//!
//! // Model changes are debounced: any number of setModel() calls collapse
//! // into one rebuild on the next idle tick.
//! if (summary.setModel(model)) {
//!   requestIdleCallback(() => {
//!     summary.tick();
//!     host.innerHTML = summary.html();
//!   });
//! }
//!
//! // Clicks on endpoint/method links become navigation events.
//! host.addEventListener('click', (e) => {
//!   const { id, shapeType } = e.target.dataset;
//!   const detail = summary.select(id, shapeType);
//!   if (detail) {
//!     e.preventDefault();
//!     host.dispatchEvent(new CustomEvent(navigationEventName(), {
//!       bubbles: true, composed: true, detail: JSON.parse(detail),
//!     }));
//!   }
//! });
//! ```
//!
//! ## Shared models: [`AwareRegistry`]
//!
//! Several summaries can follow one model published under a scope name. Each
//! element opts in with the `aware` option and picks up changes with
//! `syncAware`:
//!
//! ```js
//! const registry = new AwareRegistry();
//! const summary = new ApiSummaryElement('{"aware":"docs"}');
//!
//! registry.publish('docs', model);
//! if (summary.syncAware(registry)) {
//!   summary.tick();
//! }
//! ```

use std::sync::Arc;

use api_summary::{JsonLdGraph, SummaryComponent, SummaryConfig};
use wasm_bindgen::prelude::*;

/// One-time initialisation called at the start of every exported function.
///
/// Installs the `console_error_panic_hook` when the feature is enabled so
/// that Rust panics are forwarded to the browser console as readable errors
/// rather than appearing as generic "unreachable" WASM traps.
fn setup() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build the view-model of an AMF JSON-LD model and return it as JSON.
///
/// `options` is an optional JSON object:
/// ```json
/// { "baseUri": "https://api.example.com", "rearrangeEndpoints": true, "titleLevel": 2 }
/// ```
///
/// Throws a string error if `json` or `options` cannot be parsed. A model
/// without an API yields `{}`.
#[wasm_bindgen(js_name = buildViewModel)]
pub fn build_view_model(json: &str, options: Option<String>) -> Result<String, JsValue> {
    setup();
    let config = parse_options(options.as_deref())?;
    let graph = parse_model(json)?;
    let view = api_summary::build(&graph, &config);
    serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render the summary of an AMF JSON-LD model as sanitized HTML.
///
/// Takes the same `options` as [`build_view_model`].
#[wasm_bindgen(js_name = renderSummary)]
pub fn render_summary(json: &str, options: Option<String>) -> Result<String, JsValue> {
    setup();
    let config = parse_options(options.as_deref())?;
    let graph = parse_model(json)?;
    let view = api_summary::build(&graph, &config);
    Ok(api_summary::render_html(&view, &config))
}

/// Name of the DOM event to dispatch with a [`ApiSummaryElement::select`]
/// result as its `detail`.
#[wasm_bindgen(js_name = navigationEventName)]
pub fn navigation_event_name() -> String {
    api_summary::NAVIGATION_EVENT.to_string()
}

// ── Element API ───────────────────────────────────────────────────────────────

/// A stateful summary view with debounced rebuilds.
///
/// The host owns scheduling: `setModel` only marks a rebuild as pending, and
/// `tick` runs it.
#[wasm_bindgen]
pub struct ApiSummaryElement {
    inner: SummaryComponent,
}

#[wasm_bindgen]
impl ApiSummaryElement {
    /// Create a summary with optional JSON `options`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<String>) -> Result<ApiSummaryElement, JsValue> {
        setup();
        let config = parse_options(options.as_deref())?;
        Ok(Self {
            inner: SummaryComponent::new(config),
        })
    }

    /// Replace the options and schedule a rebuild.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: &str) -> Result<bool, JsValue> {
        let config = parse_options(Some(options))?;
        Ok(self.inner.set_config(config))
    }

    /// Assign a new model (or clear it with `undefined`) and schedule a
    /// rebuild.
    ///
    /// Returns `true` if the host should schedule a `tick()`, `false` if a
    /// rebuild was already pending.
    #[wasm_bindgen(js_name = setModel)]
    pub fn set_model(&mut self, json: Option<String>) -> Result<bool, JsValue> {
        let graph = match json {
            Some(json) => Some(Arc::new(parse_model(&json)?)),
            None => None,
        };
        Ok(self.inner.on_graph_changed(graph))
    }

    /// True while a rebuild is waiting for `tick()`.
    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> bool {
        self.inner.is_pending()
    }

    /// Run the pending rebuild, if any. Returns whether one ran.
    pub fn tick(&mut self) -> bool {
        self.inner.run_pending()
    }

    /// The current summary as sanitized HTML.
    pub fn html(&self) -> String {
        self.inner.render_html()
    }

    /// The current view-model as JSON.
    #[wasm_bindgen(js_name = viewModel)]
    pub fn view_model(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.view()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pick up the model published under this element's `aware` scope.
    ///
    /// Returns `true` when the registry holds a different model than the
    /// element and a rebuild was scheduled. Without an `aware` option this
    /// does nothing.
    #[wasm_bindgen(js_name = syncAware)]
    pub fn sync_aware(&mut self, registry: &AwareRegistry) -> bool {
        self.inner.sync_aware(&registry.inner)
    }

    /// Translate a click on a link with `data-id` / `data-shape-type` into a
    /// navigation event detail (`{"selected": …, "type": …}` as JSON).
    ///
    /// Returns `undefined` when the link is not a navigation target.
    pub fn select(&mut self, id: Option<String>, shape_type: Option<String>) -> Option<String> {
        let event = self.inner.select(id.as_deref(), shape_type.as_deref())?;
        serde_json::to_string(&event).ok()
    }
}

// ── Shared models ─────────────────────────────────────────────────────────────

/// Models shared between summaries, keyed by scope name.
#[wasm_bindgen]
pub struct AwareRegistry {
    inner: api_summary::AwareRegistry,
}

#[wasm_bindgen]
impl AwareRegistry {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AwareRegistry {
        setup();
        Self {
            inner: api_summary::AwareRegistry::new(),
        }
    }

    /// Parse `json` and publish it under `scope`, replacing any previous
    /// model there.
    pub fn publish(&mut self, scope: &str, json: &str) -> Result<(), JsValue> {
        let graph = parse_model(json)?;
        self.inner.publish(scope, Arc::new(graph));
        Ok(())
    }

    /// Remove the model under `scope`. Returns whether there was one.
    pub fn clear(&mut self, scope: &str) -> bool {
        self.inner.clear(scope).is_some()
    }

    /// True when a model is published under `scope`.
    pub fn has(&self, scope: &str) -> bool {
        self.inner.get(scope).is_some()
    }
}

impl Default for AwareRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn parse_options(options: Option<&str>) -> Result<SummaryConfig, JsValue> {
    match options.filter(|s| !s.trim().is_empty()) {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("options parse error: {e}"))),
        None => Ok(SummaryConfig::default()),
    }
}

fn parse_model(json: &str) -> Result<JsonLdGraph, JsValue> {
    JsonLdGraph::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

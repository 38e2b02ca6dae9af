//! View-model derivation: graph + configuration → [`ViewModel`].
//!
//! Every step is total. A missing API node, relation, or literal leaves the
//! corresponding field empty and never prevents sibling fields from being
//! filled.

use tracing::{debug, trace};

use crate::arrange::arrange;
use crate::config::SummaryConfig;
use crate::graph::GraphAccessor;
use crate::types::{EndpointView, OperationView, ServerView, ViewModel};
use crate::uri::compute_base_uri;
use crate::vocab::{api_contract, core};

/// Build the summary view-model of `graph`.
///
/// Identical inputs always produce an identical view-model.
pub fn build<G: GraphAccessor>(graph: &G, config: &SummaryConfig) -> ViewModel {
    let Some(api) = graph.api() else {
        debug!("model has no API node; summary is empty");
        return ViewModel::default();
    };

    let protocols = graph.scalars(api, api_contract::SCHEME);
    let servers = compute_servers(graph, api, config, &protocols);
    let endpoints = compute_endpoints(graph, api, config.rearrange_endpoints);

    let provider = first_node(graph, api, core::PROVIDER);
    let license = first_node(graph, api, core::LICENSE);

    trace!(
        endpoints = endpoints.len(),
        operations = endpoints.iter().map(|e| e.operations.len()).sum::<usize>(),
        servers = servers.len(),
        "built summary view-model"
    );

    ViewModel {
        title: graph.scalar(api, core::NAME),
        version: graph.scalar(api, core::VERSION),
        description: graph.scalar(api, core::DESCRIPTION),
        terms_of_service: graph.scalar(api, core::TERMS_OF_SERVICE),
        servers,
        protocols,
        provider_name: provider.and_then(|p| graph.scalar(p, core::NAME)),
        provider_email: provider.and_then(|p| graph.scalar(p, core::EMAIL)),
        provider_url: provider.and_then(|p| compute_url(graph, p)),
        license_name: license.and_then(|l| graph.scalar(l, core::NAME)),
        license_url: license.and_then(|l| compute_url(graph, l)),
        endpoints,
    }
}

/// The single node behind a relation that the model may store as a node, a
/// collection, or a collection of collections.
fn first_node<'a, G: GraphAccessor>(
    graph: &'a G,
    node: &'a G::Node,
    term: &str,
) -> Option<&'a G::Node> {
    graph.nodes(node, term).into_iter().next()
}

/// `core:url` as a literal, or the `@id` of a linked URL node.
fn compute_url<G: GraphAccessor>(graph: &G, node: &G::Node) -> Option<String> {
    graph.scalar(node, core::URL).or_else(|| {
        graph
            .nodes(node, core::URL)
            .into_iter()
            .find_map(|link| graph.id(link))
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
    })
}

fn compute_servers<G: GraphAccessor>(
    graph: &G,
    api: &G::Node,
    config: &SummaryConfig,
    protocols: &[String],
) -> Vec<ServerView> {
    graph
        .nodes(api, api_contract::SERVER)
        .into_iter()
        .filter_map(|server| {
            let template = graph.scalar(server, core::URL_TEMPLATE);
            let url =
                compute_base_uri(template.as_deref(), config.base_uri_override(), protocols)?;
            Some(ServerView {
                id: graph.id(server).map(str::to_string),
                url,
                description: graph.scalar(server, core::DESCRIPTION),
            })
        })
        .collect()
}

fn compute_endpoints<G: GraphAccessor>(
    graph: &G,
    api: &G::Node,
    rearrange: bool,
) -> Vec<EndpointView> {
    let mut endpoints: Vec<(Option<String>, &G::Node)> = graph
        .nodes(api, api_contract::ENDPOINT)
        .into_iter()
        .map(|node| (graph.scalar(node, api_contract::PATH), node))
        .collect();

    if rearrange {
        endpoints = arrange(endpoints, |(path, _)| path.as_deref());
    }

    endpoints
        .into_iter()
        .map(|(path, node)| EndpointView {
            id: graph.id(node).map(str::to_string),
            name: graph.scalar(node, core::NAME),
            path: path.unwrap_or_default(),
            operations: compute_operations(graph, node),
        })
        .collect()
}

fn compute_operations<G: GraphAccessor>(graph: &G, endpoint: &G::Node) -> Vec<OperationView> {
    graph
        .nodes(endpoint, api_contract::SUPPORTED_OPERATION)
        .into_iter()
        .map(|op| OperationView {
            id: graph.id(op).map(str::to_string),
            method: graph.scalar(op, api_contract::METHOD),
            name: graph.scalar(op, core::NAME),
        })
        .collect()
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::JsonLdGraph;
    use serde_json::{json, Value};

    const CORE: &str = "http://a.ml/vocabularies/core#";
    const CONTRACT: &str = "http://a.ml/vocabularies/apiContract#";

    fn v(s: &str) -> Value {
        json!([{ "@value": s }])
    }

    fn endpoint(id: &str, path: &str, methods: &[&str]) -> Value {
        let ops: Vec<Value> = methods
            .iter()
            .map(|m| {
                json!({
                    "@id": format!("{id}/{m}"),
                    format!("{CONTRACT}method"): v(m),
                })
            })
            .collect();
        json!({
            "@id": id,
            format!("{CONTRACT}path"): v(path),
            format!("{CONTRACT}supportedOperation"): ops,
        })
    }

    fn model(api: Value) -> JsonLdGraph {
        JsonLdGraph::from_value(json!([{
            "@id": "",
            "http://a.ml/vocabularies/document#encodes": [api],
        }]))
    }

    fn api(fields: Value) -> Value {
        let mut node = json!({
            "@id": "#/api",
            "@type": [format!("{CONTRACT}WebAPI")],
        });
        if let (Some(obj), Value::Object(extra)) = (node.as_object_mut(), fields) {
            obj.extend(extra);
        }
        node
    }

    #[test]
    fn no_api_node_gives_empty_view() {
        let g = JsonLdGraph::from_value(Value::Null);
        let view = build(&g, &SummaryConfig::default());
        assert!(view.is_empty());
    }

    #[test]
    fn scalar_fields() {
        let g = model(api(json!({
            format!("{CORE}name"): v("Pets"),
            format!("{CORE}version"): v("v2"),
            format!("{CORE}description"): v("All about *pets*."),
            format!("{CORE}termsOfService"): v("Be nice."),
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.title.as_deref(), Some("Pets"));
        assert_eq!(view.version.as_deref(), Some("v2"));
        assert_eq!(view.description.as_deref(), Some("All about *pets*."));
        assert_eq!(view.terms_of_service.as_deref(), Some("Be nice."));
        assert!(view.endpoints.is_empty());
        assert!(view.servers.is_empty());
    }

    #[test]
    fn provider_nested_collection_unwraps_to_contact() {
        let g = model(api(json!({
            format!("{CORE}provider"): [[{
                "@id": "#/org",
                format!("{CORE}name"): v("Pet Co"),
                format!("{CORE}email"): v("api@pets.example.com"),
                format!("{CORE}url"): [{ "@id": "https://pets.example.com" }],
            }]],
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.provider_name.as_deref(), Some("Pet Co"));
        assert_eq!(view.provider_email.as_deref(), Some("api@pets.example.com"));
        assert_eq!(view.provider_url.as_deref(), Some("https://pets.example.com"));
    }

    #[test]
    fn provider_as_single_node() {
        let g = model(api(json!({
            format!("{CORE}provider"): {
                format!("{CORE}name"): v("Solo"),
            },
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.provider_name.as_deref(), Some("Solo"));
        assert_eq!(view.provider_email, None);
        assert_eq!(view.provider_url, None);
    }

    #[test]
    fn license_takes_first_of_collection() {
        let g = model(api(json!({
            format!("{CORE}license"): [
                { format!("{CORE}name"): v("MIT"), format!("{CORE}url"): v("https://mit.example.com") },
                { format!("{CORE}name"): v("Other") },
            ],
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.license_name.as_deref(), Some("MIT"));
        assert_eq!(view.license_url.as_deref(), Some("https://mit.example.com"));
    }

    #[test]
    fn servers_and_protocols() {
        let g = model(api(json!({
            format!("{CONTRACT}scheme"): [{ "@value": "HTTPS" }, { "@value": "HTTP" }],
            format!("{CONTRACT}server"): [
                { "@id": "#/s1", format!("{CORE}urlTemplate"): v("api.example.com/v1/") },
                { "@id": "#/s2", format!("{CORE}urlTemplate"): v("http://sandbox.example.com"),
                  format!("{CORE}description"): v("Sandbox") },
                { "@id": "#/s3" },
            ],
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.protocols, vec!["HTTPS", "HTTP"]);
        assert_eq!(
            view.servers,
            vec![
                ServerView {
                    id: Some("#/s1".into()),
                    url: "https://api.example.com/v1".into(),
                    description: None,
                },
                ServerView {
                    id: Some("#/s2".into()),
                    url: "http://sandbox.example.com".into(),
                    description: Some("Sandbox".into()),
                },
            ]
        );
    }

    #[test]
    fn base_uri_override_applies_to_every_server() {
        let g = model(api(json!({
            format!("{CONTRACT}server"): [
                { format!("{CORE}urlTemplate"): v("https://a.example.com") },
                { format!("{CORE}urlTemplate"): v("https://b.example.com") },
            ],
        })));
        let config = SummaryConfig {
            base_uri: Some("http://localhost:3000/".into()),
            ..SummaryConfig::default()
        };
        let urls: Vec<_> = build(&g, &config).servers.into_iter().map(|s| s.url).collect();
        assert_eq!(urls, vec!["http://localhost:3000", "http://localhost:3000"]);
    }

    #[test]
    fn endpoints_keep_model_order_by_default() {
        let g = model(api(json!({
            format!("{CONTRACT}endpoint"): [
                endpoint("#/e1", "/b/2", &["get"]),
                endpoint("#/e2", "/a/1", &["post", "GET"]),
            ],
        })));
        let view = build(&g, &SummaryConfig::default());
        let paths: Vec<_> = view.endpoints.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/b/2", "/a/1"]);
        let methods: Vec<_> = view.endpoints[1]
            .operations
            .iter()
            .map(|o| o.method.as_deref().unwrap())
            .collect();
        assert_eq!(methods, vec!["post", "GET"]);
        assert_eq!(view.endpoints[1].operations[1].id.as_deref(), Some("#/e2/GET"));
    }

    #[test]
    fn nested_endpoint_collection_keeps_every_endpoint() {
        let g = model(api(json!({
            format!("{CONTRACT}endpoint"): [[
                endpoint("#/e1", "/a", &["get"]),
                endpoint("#/e2", "/b", &["put", "delete"]),
            ]],
        })));
        let view = build(&g, &SummaryConfig::default());
        let ids: Vec<_> = view.endpoints.iter().map(|e| e.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["#/e1", "#/e2"]);
        assert_eq!(view.endpoints[1].operations.len(), 2);
    }

    #[test]
    fn endpoints_are_arranged_when_enabled() {
        let g = model(api(json!({
            format!("{CONTRACT}endpoint"): [
                endpoint("#/e1", "/b/2", &[]),
                endpoint("#/e2", "/a/2", &[]),
                endpoint("#/e3", "/a/1", &[]),
                endpoint("#/e4", "/b/1", &[]),
            ],
        })));
        let config = SummaryConfig { rearrange_endpoints: true, ..SummaryConfig::default() };
        let view = build(&g, &config);
        let ids: Vec<_> = view.endpoints.iter().map(|e| e.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["#/e4", "#/e1", "#/e3", "#/e2"]);
        assert!(view.endpoints.iter().all(|e| e.operations.is_empty()));
    }

    #[test]
    fn endpoint_without_path_gets_empty_path() {
        let g = model(api(json!({
            format!("{CONTRACT}endpoint"): { "@id": "#/e", format!("{CORE}name"): v("Root") },
        })));
        let view = build(&g, &SummaryConfig::default());
        assert_eq!(view.endpoints.len(), 1);
        assert_eq!(view.endpoints[0].path, "");
        assert_eq!(view.endpoints[0].name.as_deref(), Some("Root"));
    }

    #[test]
    fn empty_endpoint_collection_is_empty() {
        let g = model(api(json!({ format!("{CONTRACT}endpoint"): [] })));
        assert!(build(&g, &SummaryConfig::default()).endpoints.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let g = model(api(json!({
            format!("{CORE}name"): v("Pets"),
            format!("{CONTRACT}endpoint"): [endpoint("#/e1", "/x", &["get"])],
        })));
        let config = SummaryConfig::default();
        assert_eq!(build(&g, &config), build(&g, &config));
    }
}

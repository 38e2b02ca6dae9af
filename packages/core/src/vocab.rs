//! AMF vocabulary terms used by the summary view.
//!
//! Every term is a full IRI. [`JsonLdGraph`](crate::graph::JsonLdGraph)
//! compacts them against the model's `@context` when the model was generated
//! in compact form, so callers always pass the expanded IRI.

/// `http://a.ml/vocabularies/core#` terms.
pub mod core {
    pub const NS: &str = "http://a.ml/vocabularies/core#";

    pub const NAME: &str = "http://a.ml/vocabularies/core#name";
    pub const DESCRIPTION: &str = "http://a.ml/vocabularies/core#description";
    pub const VERSION: &str = "http://a.ml/vocabularies/core#version";
    pub const TERMS_OF_SERVICE: &str = "http://a.ml/vocabularies/core#termsOfService";
    pub const PROVIDER: &str = "http://a.ml/vocabularies/core#provider";
    pub const LICENSE: &str = "http://a.ml/vocabularies/core#license";
    pub const EMAIL: &str = "http://a.ml/vocabularies/core#email";
    pub const URL: &str = "http://a.ml/vocabularies/core#url";
    pub const URL_TEMPLATE: &str = "http://a.ml/vocabularies/core#urlTemplate";
}

/// `http://a.ml/vocabularies/apiContract#` terms.
pub mod api_contract {
    pub const NS: &str = "http://a.ml/vocabularies/apiContract#";

    pub const WEB_API: &str = "http://a.ml/vocabularies/apiContract#WebAPI";
    pub const ASYNC_API: &str = "http://a.ml/vocabularies/apiContract#AsyncAPI";
    pub const ENDPOINT: &str = "http://a.ml/vocabularies/apiContract#endpoint";
    pub const PATH: &str = "http://a.ml/vocabularies/apiContract#path";
    pub const SUPPORTED_OPERATION: &str =
        "http://a.ml/vocabularies/apiContract#supportedOperation";
    pub const METHOD: &str = "http://a.ml/vocabularies/apiContract#method";
    pub const SERVER: &str = "http://a.ml/vocabularies/apiContract#server";
    pub const SCHEME: &str = "http://a.ml/vocabularies/apiContract#scheme";
}

/// `http://a.ml/vocabularies/document#` terms.
pub mod document {
    pub const NS: &str = "http://a.ml/vocabularies/document#";

    pub const ENCODES: &str = "http://a.ml/vocabularies/document#encodes";
}

/// Types that identify the root API node of a model.
pub const API_TYPES: [&str; 2] = [api_contract::WEB_API, api_contract::ASYNC_API];

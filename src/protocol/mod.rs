//! RESTCONF wire-level vocabulary: base paths, media types, query parameters,
//! request payloads and the error model.

pub mod envelope;
pub mod error;

pub use envelope::{classify, EnvelopeKind};
pub use error::{ErrorClass, RestconfError, RestconfErrorDetails};

use std::collections::BTreeMap;
use std::fmt;

/// Root resource, used for API discovery.
pub const ROOT_PATH: &str = "/restconf/";
/// Datastore resources (GET/PUT/POST/PATCH/DELETE).
pub const DATA_PATH: &str = "/restconf/data/";
/// RPC and action invocations.
pub const OPERATIONS_PATH: &str = "/restconf/operations/";
/// Vendor query API (NSO `tailf:query`).
pub const QUERY_PATH: &str = "/restconf/tailf/query/";

pub const YANG_DATA_JSON: &str = "application/yang-data+json";
pub const YANG_ERRORS_JSON: &str = "application/yang-errors+json";

/// Media types sent in the `Accept` header, in order.
pub const ACCEPT: [&str; 2] = [YANG_DATA_JSON, YANG_ERRORS_JSON];

/// [`ACCEPT`] as a single header value.
pub const ACCEPT_HEADER: &str = "application/yang-data+json,application/yang-errors+json";

/// Media type sent in the `Content-Type` header.
pub const CONTENT_TYPE: &str = YANG_DATA_JSON;

/// Name of the query parameter selecting config vs. state data.
pub const CONTENT_PARAM: &str = "content";

/// Query parameters attached to a request.
pub type QueryParams = BTreeMap<String, String>;

/// The `Accept` header value: every accepted media type, comma-joined.
pub fn accept_header() -> String {
    ACCEPT.join(",")
}

/// Value of the RESTCONF `content` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    Config,
    Nonconfig,
    All,
}

impl ContentFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Nonconfig => "nonconfig",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentFilter {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "config" => Ok(Self::Config),
            "nonconfig" => Ok(Self::Nonconfig),
            "all" => Ok(Self::All),
            other => Err(crate::Error::configuration_with_context(
                format!("unknown content filter '{}'", other),
                crate::ErrorContext::new()
                    .with_field_path(CONTENT_PARAM)
                    .with_details("expected one of: config, nonconfig, all"),
            )),
        }
    }
}

/// Request body. Structured values are serialized to JSON text before sending.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Json(serde_json::Value),
}

impl Payload {
    /// Serialize into the exact bytes that go on the wire.
    pub fn into_body(self) -> crate::Result<String> {
        match self {
            Payload::Text(text) => Ok(text),
            Payload::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<serde_json::Value> for Payload {
    fn from(v: serde_json::Value) -> Self {
        Payload::Json(v)
    }
}

/// Strip a single leading `/` from a caller-supplied resource path.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Merge the GET `content` default into caller-supplied parameters.
///
/// An explicit `content` key from the caller is never overwritten.
pub fn merge_content(query: Option<QueryParams>, content: Option<ContentFilter>) -> Option<QueryParams> {
    let Some(content) = content else {
        return query;
    };
    let mut params = query.unwrap_or_default();
    params
        .entry(CONTENT_PARAM.to_string())
        .or_insert_with(|| content.as_str().to_string());
    Some(params)
}

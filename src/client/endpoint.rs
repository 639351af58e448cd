//! Endpoint routing: which verb, which base path, which query.
//!
//! Both the async and the blocking client build a [`RequestPlan`] here and
//! hand it to their transport, so URL composition and the GET `content`
//! default live in exactly one place.

use crate::protocol::{self, ContentFilter, Payload, QueryParams};
use crate::Result;
use reqwest::Method;

/// RESTCONF resource family, each with a fixed base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/restconf/`, no path appended.
    Root,
    /// `/restconf/data/`
    Data,
    /// `/restconf/operations/`
    Operations,
    /// `/restconf/tailf/query/`, no path appended.
    Query,
}

impl Endpoint {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Root => protocol::ROOT_PATH,
            Self::Data => protocol::DATA_PATH,
            Self::Operations => protocol::OPERATIONS_PATH,
            Self::Query => protocol::QUERY_PATH,
        }
    }

    /// `host + prefix + path`, with one leading `/` stripped from `path`.
    pub fn url(&self, host: &str, path: &str) -> String {
        format!("{}{}{}", host, self.prefix(), protocol::normalize_path(path))
    }
}

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub query: Option<QueryParams>,
}

impl RequestPlan {
    pub fn root(host: &str) -> Self {
        Self {
            method: Method::GET,
            url: Endpoint::Root.url(host, ""),
            body: None,
            query: None,
        }
    }

    pub fn get(
        host: &str,
        path: &str,
        content: Option<ContentFilter>,
        query: Option<QueryParams>,
    ) -> Self {
        Self {
            method: Method::GET,
            url: Endpoint::Data.url(host, path),
            body: None,
            query: protocol::merge_content(query, content),
        }
    }

    pub fn data(
        method: Method,
        host: &str,
        path: &str,
        payload: Payload,
        query: Option<QueryParams>,
    ) -> Result<Self> {
        Ok(Self {
            method,
            url: Endpoint::Data.url(host, path),
            body: Some(payload.into_body()?),
            query,
        })
    }

    pub fn delete(host: &str, path: &str, query: Option<QueryParams>) -> Self {
        Self {
            method: Method::DELETE,
            url: Endpoint::Data.url(host, path),
            body: None,
            query,
        }
    }

    pub fn action(
        host: &str,
        path: &str,
        payload: Payload,
        query: Option<QueryParams>,
    ) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            url: Endpoint::Operations.url(host, path),
            body: Some(payload.into_body()?),
            query,
        })
    }

    pub fn query(host: &str, payload: Payload, query: Option<QueryParams>) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            url: Endpoint::Query.url(host, ""),
            body: Some(payload.into_body()?),
            query,
        })
    }
}

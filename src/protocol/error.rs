//! RESTCONF error model.
//!
//! A [`RestconfError`] is both a failure value (it implements
//! [`std::error::Error`]) and a plain record: [`RestconfError::to_map`] and the
//! `Serialize` impl expose the same fields under their hyphenated wire names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Fields extracted from a non-success RESTCONF reply.
///
/// `status_code` is always set. Every other field is present only when the
/// server supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestconfErrorDetails {
    #[serde(rename = "status-code")]
    pub status_code: u16,
    #[serde(rename = "error-tag", default, skip_serializing_if = "Option::is_none")]
    pub error_tag: Option<String>,
    #[serde(rename = "error-message", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(rename = "error-path", default, skip_serializing_if = "Option::is_none")]
    pub error_path: Option<String>,
}

impl RestconfErrorDetails {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.error_tag = Some(tag.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.error_path = Some(path.into());
        self
    }

    /// Structured view with hyphenated keys, omitting absent fields.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("status-code".to_string(), Value::from(self.status_code));
        let optional = [
            ("error-tag", &self.error_tag),
            ("error-message", &self.error_message),
            ("error-type", &self.error_type),
            ("error-path", &self.error_path),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                map.insert(key.to_string(), Value::String(v.clone()));
            }
        }
        map
    }
}

impl fmt::Display for RestconfErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status_code: {}", self.status_code)?;
        if let Some(tag) = &self.error_tag {
            write!(f, "\nerror-tag: {}", tag)?;
        }
        if let Some(message) = &self.error_message {
            write!(f, "\nerror-message: {}", message)?;
        }
        if let Some(error_type) = &self.error_type {
            write!(f, "\nerror-type: {}", error_type)?;
        }
        if let Some(path) = &self.error_path {
            write!(f, "\nerror-path: {}", path)?;
        }
        Ok(())
    }
}

/// A classified RESTCONF failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestconfError {
    /// Any non-success reply other than 404.
    #[error("{0}")]
    Protocol(RestconfErrorDetails),

    /// 404. Details are usually empty: the request was valid but the node does not exist.
    #[error("{0}")]
    NotFound(RestconfErrorDetails),
}

impl RestconfError {
    pub fn protocol(details: RestconfErrorDetails) -> Self {
        RestconfError::Protocol(details)
    }

    pub fn not_found() -> Self {
        RestconfError::NotFound(RestconfErrorDetails::new(404))
    }

    pub fn details(&self) -> &RestconfErrorDetails {
        match self {
            RestconfError::Protocol(d) | RestconfError::NotFound(d) => d,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.details().status_code
    }

    pub fn error_tag(&self) -> Option<&str> {
        self.details().error_tag.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.details().error_message.as_deref()
    }

    pub fn error_type(&self) -> Option<&str> {
        self.details().error_type.as_deref()
    }

    pub fn error_path(&self) -> Option<&str> {
        self.details().error_path.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RestconfError::NotFound(_))
    }

    pub fn category(&self) -> ErrorClass {
        ErrorClass::from_http_status(self.status_code())
    }

    /// Loggable record with hyphenated keys (`status-code`, `error-tag`, ...).
    pub fn to_map(&self) -> Map<String, Value> {
        self.details().to_map()
    }
}

impl Serialize for RestconfError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.details().serialize(serializer)
    }
}

/// Error taxonomy derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// 404: no detail expected.
    NotFound,
    /// 5xx: body kept verbatim as the message.
    ServerError,
    /// Everything else, with a structured or empty envelope.
    ProtocolError,
}

impl ErrorClass {
    #[inline]
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            s if s >= 500 => Self::ServerError,
            _ => Self::ProtocolError,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::ServerError => "server_error",
            Self::ProtocolError => "protocol_error",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

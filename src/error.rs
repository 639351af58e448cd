use crate::protocol::RestconfError;
use thiserror::Error;

/// Structured error context for configuration and envelope failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "proxies.socks", "ietf-restconf:errors.error")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config_loader", "error_classifier")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the RESTCONF client.
///
/// `Restconf` carries a classified server reply. `UnsupportedResponseShape` and
/// `MalformedEnvelope` are fatal: the server answered with an error body the
/// client cannot interpret.
#[derive(Debug, Error)]
pub enum Error {
    #[error("RESTCONF error: {0}")]
    Restconf(#[from] RestconfError),

    #[error("Unsupported RESTCONF response: expected exactly one error entry, got {count}. Returned: {body}")]
    UnsupportedResponseShape { count: usize, body: String },

    #[error("Malformed RESTCONF error envelope: {message}{}", format_context(.context))]
    MalformedEnvelope {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new malformed-envelope error with structured context
    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedEnvelope {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::MalformedEnvelope { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// The classified RESTCONF error, if this is one.
    pub fn as_restconf(&self) -> Option<&RestconfError> {
        match self {
            Error::Restconf(e) => Some(e),
            _ => None,
        }
    }

    /// True for replies the client refuses to interpret.
    pub fn is_fatal_envelope(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedResponseShape { .. }
                | Error::MalformedEnvelope { .. }
                | Error::Serialization(_)
        )
    }
}

//! Error classification over RESTCONF error envelopes.

use super::error::{RestconfError, RestconfErrorDetails};
use crate::utils::json_path::PathMapper;
use crate::{Error, ErrorContext, Result};
use serde_json::Value;
use tracing::debug;

/// Which error envelope shape the server is expected to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// `ietf-restconf:errors`, used by every plain operation.
    Restconf,
    /// `ietf-yang-patch:yang-patch-status`, used by YANG Patch edits.
    YangPatch,
}

impl EnvelopeKind {
    pub fn from_patch_flag(yang_patch: bool) -> Self {
        if yang_patch {
            Self::YangPatch
        } else {
            Self::Restconf
        }
    }

    /// Dot path to the error list inside the envelope.
    pub fn error_list_path(&self) -> &'static str {
        match self {
            Self::Restconf => "ietf-restconf:errors.error",
            Self::YangPatch => "ietf-yang-patch:yang-patch-status.errors.error",
        }
    }
}

/// Classify a non-success reply.
///
/// - 404 yields [`RestconfError::NotFound`] without looking at the body.
/// - 5xx keeps the raw body as `error_message`.
/// - Anything else parses the error envelope, if there is a body.
///
/// Envelopes holding more than one error entry are rejected with
/// [`Error::UnsupportedResponseShape`]. Bodies that are not a single-entry
/// envelope fail with [`Error::MalformedEnvelope`] or [`Error::Serialization`].
pub fn classify(status: u16, body: &str, yang_patch: bool) -> Result<RestconfError> {
    if status == 404 {
        debug!(status, "classified as not found");
        return Ok(RestconfError::not_found());
    }

    let mut details = RestconfErrorDetails::new(status);

    if status >= 500 {
        debug!(status, "classified as server error");
        details.error_message = Some(body.to_string());
        return Ok(RestconfError::Protocol(details));
    }

    if body.is_empty() {
        debug!(status, "classified with empty envelope");
        return Ok(RestconfError::Protocol(details));
    }

    let kind = EnvelopeKind::from_patch_flag(yang_patch);
    let json: Value = serde_json::from_str(body)?;
    let entry = single_entry(&json, kind, body)?;

    details.error_tag = Some(
        PathMapper::get_string(entry, "error-tag").ok_or_else(|| {
            Error::malformed_with_context(
                "error entry has no error-tag",
                ErrorContext::new()
                    .with_field_path(format!("{}[0].error-tag", kind.error_list_path()))
                    .with_source("error_classifier"),
            )
        })?,
    );
    details.error_type = PathMapper::get_string(entry, "error-type");
    details.error_message = PathMapper::get_string(entry, "error-message");
    details.error_path = PathMapper::get_string(entry, "error-path");

    debug!(status, tag = ?details.error_tag, ?kind, "classified error envelope");
    Ok(RestconfError::Protocol(details))
}

fn single_entry<'a>(json: &'a Value, kind: EnvelopeKind, body: &str) -> Result<&'a Value> {
    let path = kind.error_list_path();
    let malformed = |msg: &str| {
        Error::malformed_with_context(
            msg,
            ErrorContext::new()
                .with_field_path(path)
                .with_source("error_classifier"),
        )
    };

    let entries = PathMapper::get_path(json, path)
        .ok_or_else(|| malformed("error list not found"))?
        .as_array()
        .ok_or_else(|| malformed("error list is not an array"))?;

    match entries.as_slice() {
        [entry] => Ok(entry),
        [] => Err(malformed("error list is empty")),
        _ => Err(Error::UnsupportedResponseShape {
            count: entries.len(),
            body: body.to_string(),
        }),
    }
}

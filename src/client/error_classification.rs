//! Error classification for transport responses.
//!
//! Routing never classifies on its own. Callers inspect the status and opt in,
//! either with [`ClassifyExt::classify`] or with [`ClassifyExt::check_status`].

use crate::protocol::{self, RestconfError};
use crate::{Error, Result};
use std::future::Future;

pub trait ClassifyExt: Sized {
    /// Read the body and classify the reply. Intended for non-2xx responses.
    fn classify(self, yang_patch: bool) -> impl Future<Output = Result<RestconfError>> + Send;

    /// Pass 2xx responses through; classify everything else into [`Error::Restconf`].
    fn check_status(self, yang_patch: bool) -> impl Future<Output = Result<Self>> + Send;
}

impl ClassifyExt for reqwest::Response {
    async fn classify(self, yang_patch: bool) -> Result<RestconfError> {
        let status = self.status().as_u16();
        let body = self
            .text()
            .await
            .map_err(|e| Error::Transport(crate::transport::TransportError::Http(e)))?;
        protocol::classify(status, &body, yang_patch)
    }

    async fn check_status(self, yang_patch: bool) -> Result<Self> {
        if self.status().is_success() {
            return Ok(self);
        }
        Err(Error::Restconf(self.classify(yang_patch).await?))
    }
}

/// Blocking counterpart of [`ClassifyExt`].
pub trait BlockingClassifyExt: Sized {
    fn classify(self, yang_patch: bool) -> Result<RestconfError>;

    fn check_status(self, yang_patch: bool) -> Result<Self>;
}

impl BlockingClassifyExt for reqwest::blocking::Response {
    fn classify(self, yang_patch: bool) -> Result<RestconfError> {
        let status = self.status().as_u16();
        let body = self
            .text()
            .map_err(|e| Error::Transport(crate::transport::TransportError::Http(e)))?;
        protocol::classify(status, &body, yang_patch)
    }

    fn check_status(self, yang_patch: bool) -> Result<Self> {
        if self.status().is_success() {
            return Ok(self);
        }
        Err(Error::Restconf(BlockingClassifyExt::classify(self, yang_patch)?))
    }
}

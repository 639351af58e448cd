//! # restconf-client
//!
//! Client library for the RESTCONF network-management protocol (RFC 8040),
//! with support for the NSO vendor query API.
//!
//! ## Overview
//!
//! The crate does three things:
//!
//! - **Session building**: basic auth, TLS verification policy, proxies and the
//!   YANG-JSON `Accept`/`Content-Type` headers, derived from a [`ClientConfig`].
//! - **Endpoint routing**: GET/PUT/POST/PATCH/DELETE under `/restconf/data/`,
//!   actions under `/restconf/operations/`, vendor queries under
//!   `/restconf/tailf/query/` and discovery on `/restconf/`. Responses are
//!   returned as-is, whatever their status.
//! - **Error classification**: turning a failed reply into a [`RestconfError`],
//!   parsing the `ietf-restconf:errors` or `ietf-yang-patch:yang-patch-status`
//!   envelope when one is present.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restconf_client::{ClassifyExt, ClientConfig, RestconfClient};
//!
//! #[tokio::main]
//! async fn main() -> restconf_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .address("https://nso.example.net")
//!         .port(8888)
//!         .credentials("admin", "admin")
//!         .build();
//!     let client = RestconfClient::new(config)?;
//!
//!     let response = client.get("/tailf-ncs:devices/device=ce0").await?;
//!     if !response.status().is_success() {
//!         let err = response.classify(false).await?;
//!         eprintln!("{}", err);
//!         return Err(err.into());
//!     }
//!     println!("{}", response.text().await.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Async and blocking clients, configuration, classification helpers |
//! | [`protocol`] | Base paths, media types, payloads, error model and envelope parsing |
//! | [`transport`] | Session construction on top of `reqwest` |
//! | [`tls`] | Process-wide insecure-TLS warning switch |

pub mod client;
pub mod protocol;
pub mod tls;
pub mod transport;
pub mod utils;

// Re-export main types for convenience
pub use client::{
    BlockingClassifyExt, BlockingRestconfClient, ClassifyExt, ClientConfig, ClientConfigBuilder,
    RestconfClient,
};
pub use protocol::{
    ContentFilter, ErrorClass, Payload, QueryParams, RestconfError, RestconfErrorDetails,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

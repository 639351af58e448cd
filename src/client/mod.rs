//! RESTCONF clients, their configuration and response classification.
//!
//! [`RestconfClient`] and [`BlockingRestconfClient`] share URL composition
//! through [`endpoint::RequestPlan`]; only the transport differs.

pub mod blocking;
pub mod config;
pub mod core;
pub mod endpoint;
pub mod error_classification;

pub use self::core::RestconfClient;
pub use blocking::BlockingRestconfClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::{Endpoint, RequestPlan};
pub use error_classification::{BlockingClassifyExt, ClassifyExt};

//! HTTP transport and session construction.

pub mod http;

pub use http::{BlockingHttpTransport, HttpTransport, Session, TransportError};

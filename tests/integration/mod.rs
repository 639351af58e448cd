//! Integration tests with mock HTTP server

pub mod blocking;
pub mod mock_server;
pub mod routing;

//! Mock RESTCONF controller setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use restconf_client::{BlockingRestconfClient, ClientConfig, ClientConfigBuilder, RestconfClient};

pub const ACCEPT: &str = "application/yang-data+json,application/yang-errors+json";
pub const CONTENT_TYPE: &str = "application/yang-data+json";

/// Test fixture that owns a mock controller
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    /// Blocking tests must not run inside a tokio runtime.
    pub fn new_blocking() -> Self {
        Self {
            server: Server::new(),
        }
    }

    /// Config builder pointed at the mock server
    pub fn config(&self) -> ClientConfigBuilder {
        let host_with_port = self.server.host_with_port();
        let (host, port) = host_with_port
            .rsplit_once(':')
            .expect("mock server address");
        ClientConfig::builder()
            .address(host)
            .port(port.parse().expect("mock server port"))
    }

    pub fn client(&self) -> RestconfClient {
        RestconfClient::new(self.config().build()).expect("client")
    }

    pub fn blocking_client(&self) -> BlockingRestconfClient {
        BlockingRestconfClient::new(self.config().build()).expect("client")
    }

    /// Mock answering `method path` with the standard RESTCONF headers checked
    pub async fn mock_restconf(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("accept", ACCEPT)
            .match_header("content-type", CONTENT_TYPE)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/yang-data+json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock answering with an `ietf-restconf:errors` envelope
    pub async fn mock_error_response(&mut self, method: &str, path: &str, status: usize, error_body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/yang-errors+json")
            .with_body(error_body)
            .create_async()
            .await
    }
}

use crate::client::ClientConfig;
use crate::protocol::{self, QueryParams};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Proxy};
use tracing::debug;

/// Per-request settings derived from [`ClientConfig`]: controller host, basic
/// auth and TLS policy. Headers and auth are attached to every request.
#[derive(Debug, Clone)]
pub struct Session {
    host: String,
    auth: Option<(String, String)>,
    verify_tls: bool,
}

impl Session {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            host: config.host()?,
            auth: config
                .credentials()
                .map(|(u, p)| (u.to_string(), p.to_string())),
            verify_tls: config.verify_tls,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// `Accept` and `Content-Type` for YANG-JSON.
    pub fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(protocol::ACCEPT_HEADER));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(protocol::CONTENT_TYPE));
        headers
    }

    fn before_send(&self, method: &Method, url: &str) {
        debug!(%method, url, auth = self.auth.is_some(), "sending RESTCONF request");
        if !self.verify_tls && url.starts_with("https://") {
            crate::tls::warn_insecure(url);
        }
    }
}

/// Translate the scheme-to-URL proxy map into transport proxies.
pub fn proxies(config: &ClientConfig) -> Result<Vec<Proxy>> {
    config
        .proxies
        .iter()
        .map(|(scheme, url)| {
            let proxy = match scheme.as_str() {
                "http" => Proxy::http(url),
                "https" => Proxy::https(url),
                "all" => Proxy::all(url),
                other => {
                    return Err(Error::configuration_with_context(
                        format!("unsupported proxy scheme '{}'", other),
                        ErrorContext::new()
                            .with_field_path(format!("proxies.{}", other))
                            .with_details("expected one of: http, https, all")
                            .with_source("session_builder"),
                    ))
                }
            };
            proxy.map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy url: {}", e),
                    ErrorContext::new()
                        .with_field_path(format!("proxies.{}", scheme))
                        .with_details(url.clone())
                        .with_source("session_builder"),
                )
            })
        })
        .collect()
}

/// Async HTTP transport.
pub struct HttpTransport {
    client: reqwest::Client,
    session: Session,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session = Session::from_config(config)?;

        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(!config.verify_tls);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        for proxy in proxies(config)? {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        query_params: Option<&QueryParams>,
    ) -> Result<reqwest::Response> {
        self.session.before_send(&method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(Session::headers());

        if let Some((username, password)) = &self.session.auth {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(params) = query_params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

/// Blocking HTTP transport. Must not be created or used from inside an async runtime.
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
    session: Session,
}

impl BlockingHttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session = Session::from_config(config)?;

        let mut builder =
            reqwest::blocking::Client::builder().danger_accept_invalid_certs(!config.verify_tls);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        for proxy in proxies(config)? {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        query_params: Option<&QueryParams>,
    ) -> Result<reqwest::blocking::Response> {
        self.session.before_send(&method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(Session::headers());

        if let Some((username, password)) = &self.session.auth {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(params) = query_params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        request
            .send()
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

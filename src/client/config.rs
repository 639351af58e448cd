use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

fn default_address() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_verify() -> bool {
    true
}

/// Connection settings for a RESTCONF controller.
///
/// Immutable once handed to a client. Can be built in code through
/// [`ClientConfig::builder`] or loaded from YAML:
///
/// ```yaml
/// address: https://nso.example.net
/// port: 8888
/// username: admin
/// password: admin
/// verify_tls: false
/// proxies:
///   https: http://proxy.example.net:3128
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default = "default_verify")]
    pub verify_tls: bool,
    /// Scheme (`http`, `https` or `all`) to proxy URL.
    #[serde(default)]
    pub proxies: BTreeMap<String, String>,
    /// Asks the composition root to call [`crate::tls::suppress_insecure_warnings`].
    /// Clients never act on this flag themselves.
    #[serde(default)]
    pub disable_warning: bool,
    /// Request timeout in milliseconds; `None` keeps the transport default.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            username: None,
            password: None,
            verify_tls: true,
            proxies: BTreeMap::new(),
            disable_warning: false,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("failed to read config: {}", e),
                ErrorContext::new()
                    .with_details(path.to_string_lossy())
                    .with_source("config_loader"),
            )
        })?;
        Self::from_yaml_str(&content)
    }

    /// Basic-auth pair, only when both halves are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.as_str(), p.as_str())),
            _ => None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// `scheme://address:port`, with `http://` assumed when the address has no scheme.
    pub fn host(&self) -> Result<String> {
        let address = self.address.trim_end_matches('/');
        let host = if address.contains("://") {
            format!("{}:{}", address, self.port)
        } else {
            format!("http://{}:{}", address, self.port)
        };

        url::Url::parse(&host).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid controller address: {}", e),
                ErrorContext::new()
                    .with_field_path("address")
                    .with_details(host.clone()),
            )
        })?;
        Ok(host)
    }
}

/// Builder for [`ClientConfig`].
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.address = address.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Disable to accept self-signed controller certificates.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    pub fn proxy(mut self, scheme: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.proxies.insert(scheme.into(), url.into());
        self
    }

    pub fn disable_warning(mut self, disable: bool) -> Self {
        self.config.disable_warning = disable;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! SOAP endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Path of the SOAP service below the server's base URL.
pub const DEFAULT_ENDPOINT_PATH: &str = "/rpc/soap/jirasoapservice-v2";

const fn default_timeout_secs() -> u64 {
    30
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}

fn default_user_agent() -> String {
    format!("jira-soap/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server root, e.g. `https://jira.example.com`.
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint_path: default_endpoint_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Full SOAP endpoint URL: base URL joined with the endpoint path.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Check that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if no base URL is set and
    /// [`ConfigError::InvalidValue`] if it is not an `http(s)` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("server"),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: String::from("server.base_url"),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        Ok(())
    }
}

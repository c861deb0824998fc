//! # jira-config
//!
//! Layered configuration loading for the JIRA SOAP client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JIRA_SOAP_*` prefix, `__` as separator)
//! 2. `.env` entries (only with [`JiraConfig::load_with_dotenv`])
//! 3. Project-level `.jira-soap/config.toml`
//! 4. User-level `~/.config/jira-soap/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JIRA_SOAP_SERVER__BASE_URL` -> `server.base_url`,
//! `JIRA_SOAP_AUTH__USERNAME` -> `auth.username`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use jira_config::JiraConfig;
//!
//! let config = JiraConfig::load_with_dotenv().expect("config");
//! if config.server.is_configured() {
//!     println!("SOAP endpoint: {}", config.server.endpoint_url());
//! }
//! ```

mod auth;
mod error;
mod server;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use server::{DEFAULT_ENDPOINT_PATH, ServerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "JIRA_SOAP_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl JiraConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` support.
    ///
    /// Entries of the nearest `.env` file are layered below the process
    /// environment; the process environment itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] as [`load`](Self::load) does.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let overrides = Self::find_dotenv()
            .map(|path| read_dotenv(&path))
            .unwrap_or_default();
        Self::load_with_env_overrides(&overrides)
    }

    /// Load configuration with extra `JIRA_SOAP_*` style key/value pairs
    /// layered between the TOML files and the process environment.
    ///
    /// Keys without the prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] as [`load`](Self::load) does.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::file_figment();
        for (key, value) in overrides {
            if let Some(path) = env_key_to_path(key) {
                // Same typing as the env provider: "30" is a number, "true" a bool.
                let value: Value = value.parse().unwrap_or_else(|never| match never {});
                figment = figment.merge(Serialized::default(&path, value));
            }
        }
        figment
            .merge(Self::env_provider())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        Self::file_figment().merge(Self::env_provider())
    }

    fn file_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".jira-soap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jira-soap").join("config.toml"))
    }

    /// Nearest `.env`: the current directory first, then up from
    /// `CARGO_MANIFEST_DIR` (at most 3 levels) when running under cargo.
    fn find_dotenv() -> Option<PathBuf> {
        let local = PathBuf::from(".env");
        if local.exists() {
            return Some(local);
        }
        let mut dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR")?);
        for _ in 0..3 {
            let env_path = dir.join(".env");
            if env_path.exists() {
                return Some(env_path);
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}

/// `JIRA_SOAP_SERVER__BASE_URL` -> `server.base_url`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}

/// Entries of a `.env` file; unreadable files and bad lines are skipped.
fn read_dotenv(path: &Path) -> Vec<(String, String)> {
    dotenvy::from_path_iter(path)
        .map(|entries| entries.filter_map(Result::ok).collect())
        .unwrap_or_default()
}

//! Login credentials.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Username and password, if both are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if either is empty.
    pub fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        if self.is_configured() {
            Ok((&self.username, &self.password))
        } else {
            Err(ConfigError::NotConfigured {
                section: String::from("auth"),
            })
        }
    }
}

//! Authenticated sessions.

use jira_config::JiraConfig;
use tracing::{debug, info};

use crate::client::JiraSoapClient;
use crate::error::SoapError;
use crate::service::JiraSoapService;

/// A logged-in client and its session token.
///
/// Call [`JiraSession::logout`] when done; dropping the session leaves the
/// token to expire on the server.
#[derive(Debug, Clone)]
pub struct JiraSession {
    client: JiraSoapClient,
    token: String,
}

impl JiraSession {
    /// Log in with explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SoapError::Remote`] with an authentication fault if the
    /// credentials are rejected, or any transport error from the call.
    pub async fn login(
        client: JiraSoapClient,
        username: &str,
        password: &str,
    ) -> Result<Self, SoapError> {
        let token = client.login(username, password).await?;
        info!(username, endpoint = client.endpoint(), "logged in");
        Ok(Self { client, token })
    }

    /// Build a client from `config` and log in with its `auth` section.
    ///
    /// # Errors
    ///
    /// Returns [`SoapError::Config`] if no credentials are configured, and
    /// otherwise the errors of [`JiraSession::login`].
    pub async fn from_config(config: &JiraConfig) -> Result<Self, SoapError> {
        let (username, password) = config.auth.credentials()?;
        let client = JiraSoapClient::new(&config.server)?;
        Self::login(client, username, password).await
    }

    /// Resume a session from a token obtained earlier.
    #[must_use]
    pub const fn with_token(client: JiraSoapClient, token: String) -> Self {
        Self { client, token }
    }

    #[must_use]
    pub const fn client(&self) -> &JiraSoapClient {
        &self.client
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// End the session. Returns whether the server still knew the token.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error from the `logout` call.
    pub async fn logout(self) -> Result<bool, SoapError> {
        let known = self.client.logout(&self.token).await?;
        debug!(known, "logged out");
        Ok(known)
    }
}

use anyhow::Context;
use jira_config::JiraConfig;
use jira_soap::{JiraSession, JiraSoapClient};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    session: JiraSession,
}

impl AppContext {
    /// Log in with the configured credentials.
    pub async fn init(config: JiraConfig) -> anyhow::Result<Self> {
        let session = JiraSession::from_config(&config)
            .await
            .with_context(|| format!("failed to log in to {}", config.server.endpoint_url()))?;
        Ok(Self { session })
    }

    #[must_use]
    pub const fn client(&self) -> &JiraSoapClient {
        self.session.client()
    }

    #[must_use]
    pub fn token(&self) -> &str {
        self.session.token()
    }

    /// Log out. Failures only warn; the command result has already been produced.
    pub async fn close(self) {
        if let Err(error) = self.session.logout().await {
            tracing::warn!(%error, "logout failed");
        }
    }
}

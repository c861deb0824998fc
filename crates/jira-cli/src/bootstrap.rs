use anyhow::Context;
use jira_config::JiraConfig;

use crate::cli::GlobalFlags;

/// Load layered config and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JiraConfig> {
    let mut config = JiraConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config
        .server
        .validate()
        .context("set server.base_url in .jira-soap/config.toml or JIRA_SOAP_SERVER__BASE_URL")?;
    Ok(config)
}

fn apply_overrides(config: &mut JiraConfig, flags: &GlobalFlags) {
    if let Some(base_url) = &flags.base_url {
        config.server.base_url.clone_from(base_url);
    }
    if let Some(username) = &flags.user {
        config.auth.username.clone_from(username);
    }
}

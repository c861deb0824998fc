use jira_config::JiraConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &JiraConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &JiraConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.server.is_configured() && has_single_underscore_key(&env_keys, "JIRA_SOAP_SERVER") {
        warnings.push(
            "Server config appears default while JIRA_SOAP_SERVER* env vars exist. Use double underscores (example: JIRA_SOAP_SERVER__BASE_URL)."
                .to_string(),
        );
    }

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "JIRA_SOAP_AUTH") {
        warnings.push(
            "Auth config appears default while JIRA_SOAP_AUTH* env vars exist. Use double underscores (example: JIRA_SOAP_AUTH__USERNAME)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}

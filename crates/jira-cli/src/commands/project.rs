use jira_soap::JiraSoapService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jira-soap project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.client();
    let token = ctx.token();
    match action {
        ProjectCommands::List => output(&client.get_projects_no_schemes(token).await?, flags.format),
        ProjectCommands::Get { key } => {
            output(&client.get_project_by_key(token, key).await?, flags.format)
        }
        ProjectCommands::Versions { key } => {
            output(&client.get_versions(token, key).await?, flags.format)
        }
        ProjectCommands::Components { key } => {
            output(&client.get_components(token, key).await?, flags.format)
        }
    }
}

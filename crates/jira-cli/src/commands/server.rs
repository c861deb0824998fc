use jira_soap::JiraSoapService;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jira-soap server-info`.
pub async fn info(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let info = ctx.client().get_server_info(ctx.token()).await?;
    output(&info, flags.format)
}

/// Handle `jira-soap configuration`.
pub async fn configuration(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let configuration = ctx.client().get_configuration(ctx.token()).await?;
    output(&configuration, flags.format)
}

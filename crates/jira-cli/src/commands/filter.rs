use jira_soap::JiraSoapService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterCommands;
use crate::commands::issue::issue_rows;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FilterCount<'a> {
    filter: &'a str,
    count: i64,
}

/// Handle `jira-soap filter`.
pub async fn handle(
    action: &FilterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FilterCommands::List => {
            let filters = ctx.client().get_favourite_filters(ctx.token()).await?;
            output(&filters, flags.format)
        }
        FilterCommands::Issues { id } => {
            let issues = match flags.limit {
                Some(limit) => {
                    ctx.client()
                        .get_issues_from_filter_with_limit(ctx.token(), id, 0, i32::try_from(limit)?)
                        .await?
                }
                None => ctx.client().get_issues_from_filter(ctx.token(), id).await?,
            };
            issue_rows(&issues, flags)
        }
        FilterCommands::Count { id } => {
            let count = ctx.client().get_issue_count_for_filter(ctx.token(), id).await?;
            output(&FilterCount { filter: id, count }, flags.format)
        }
    }
}

use chrono::Utc;
use jira_core::entities::RemoteWorklog;
use jira_soap::JiraSoapService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{WorklogAddArgs, WorklogCommands};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WorklogDeleted<'a> {
    id: &'a str,
    deleted: bool,
}

/// Handle `jira-soap worklog`.
pub async fn handle(
    action: &WorklogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorklogCommands::List { key } => {
            let worklogs = ctx.client().get_worklogs(ctx.token(), key).await?;
            output(&worklogs, flags.format)
        }
        WorklogCommands::Add(args) => add(args, ctx, flags).await,
        WorklogCommands::Delete { id } => {
            ctx.client()
                .delete_worklog_and_auto_adjust_remaining_estimate(ctx.token(), id)
                .await?;
            output(&WorklogDeleted { id, deleted: true }, flags.format)
        }
    }
}

async fn add(args: &WorklogAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let worklog = RemoteWorklog {
        time_spent: Some(args.time_spent.clone()),
        start_date: Some(args.started.unwrap_or_else(Utc::now)),
        comment: args.comment.clone(),
        ..RemoteWorklog::default()
    };

    let created = match &args.remaining {
        Some(remaining) => {
            ctx.client()
                .add_worklog_with_new_remaining_estimate(ctx.token(), &args.key, &worklog, remaining)
                .await?
        }
        None => {
            ctx.client()
                .add_worklog_and_auto_adjust_remaining_estimate(ctx.token(), &args.key, &worklog)
                .await?
        }
    };
    output(&created, flags.format)
}

use jira_core::entities::RemoteIssue;
use jira_soap::JiraSoapService;
use tracing::debug;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCreateArgs;
use crate::context::AppContext;
use crate::output::output;

fn build_issue(args: &IssueCreateArgs) -> RemoteIssue {
    RemoteIssue {
        project: Some(args.project.clone()),
        issue_type: Some(args.issue_type.clone()),
        summary: Some(args.summary.clone()),
        description: args.description.clone(),
        assignee: args.assignee.clone(),
        priority: args.priority.clone(),
        ..RemoteIssue::default()
    }
}

pub async fn run(args: &IssueCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = build_issue(args);
    let created = match &args.parent {
        Some(parent) => {
            ctx.client()
                .create_issue_with_parent(ctx.token(), &issue, parent)
                .await?
        }
        None => ctx.client().create_issue(ctx.token(), &issue).await?,
    };
    debug!(key = created.key.as_deref(), "issue created");
    output(&created, flags.format)
}

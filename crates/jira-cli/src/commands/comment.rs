use jira_core::entities::RemoteComment;
use jira_soap::JiraSoapService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CommentAdded<'a> {
    issue: &'a str,
    added: bool,
}

/// Handle `jira-soap comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { key } => {
            let mut comments = ctx.client().get_comments(ctx.token(), key).await?;
            if let Some(limit) = flags.limit {
                comments.truncate(usize::try_from(limit)?);
            }
            output(&comments, flags.format)
        }
        CommentCommands::Add { key, body, group } => {
            let comment = RemoteComment {
                body: Some(body.clone()),
                group_level: group.clone(),
                ..RemoteComment::default()
            };
            ctx.client().add_comment(ctx.token(), key, &comment).await?;
            output(
                &CommentAdded {
                    issue: key,
                    added: true,
                },
                flags.format,
            )
        }
    }
}

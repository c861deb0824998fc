mod create;
mod fields;

use jira_core::entities::RemoteIssue;
use jira_soap::JiraSoapService;
use serde::Serialize;

use self::fields::parse_field_values;
use crate::cli::subcommands::IssueCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_SEARCH_MAX: u32 = 50;

/// Compact issue listing used for table output.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct IssueRow<'a> {
    key: &'a str,
    status: &'a str,
    priority: &'a str,
    assignee: &'a str,
    summary: &'a str,
}

impl<'a> From<&'a RemoteIssue> for IssueRow<'a> {
    fn from(issue: &'a RemoteIssue) -> Self {
        Self {
            key: issue.key.as_deref().unwrap_or("-"),
            status: issue.status.as_deref().unwrap_or("-"),
            priority: issue.priority.as_deref().unwrap_or("-"),
            assignee: issue.assignee.as_deref().unwrap_or("-"),
            summary: issue.summary.as_deref().unwrap_or(""),
        }
    }
}

/// Print issues: compact rows for tables, full beans otherwise.
pub fn issue_rows(issues: &[RemoteIssue], flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let rows = issues.iter().map(IssueRow::from).collect::<Vec<_>>();
        output(&rows, flags.format)
    } else {
        output(&issues, flags.format)
    }
}

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    key: &'a str,
    resolved: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    key: &'a str,
    deleted: bool,
}

/// Handle `jira-soap issue`.
pub async fn handle(
    action: &IssueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.client();
    let token = ctx.token();
    match action {
        IssueCommands::Get { key } => output(&client.get_issue(token, key).await?, flags.format),
        IssueCommands::Search { jql, max } => {
            let max = match max {
                Some(max) => *max,
                None => i32::try_from(flags.limit_or(DEFAULT_SEARCH_MAX))?,
            };
            let issues = client.get_issues_from_jql_search(token, jql, max).await?;
            issue_rows(&issues, flags)
        }
        IssueCommands::TextSearch { terms, projects } => {
            let max = i32::try_from(flags.limit_or(DEFAULT_SEARCH_MAX))?;
            let issues = if projects.is_empty() {
                client
                    .get_issues_from_text_search_with_limit(token, terms, 0, max)
                    .await?
            } else {
                client
                    .get_issues_from_text_search_with_project(token, projects, terms, max)
                    .await?
            };
            issue_rows(&issues, flags)
        }
        IssueCommands::Create(args) => create::run(args, ctx, flags).await,
        IssueCommands::Update { key, fields } => {
            let values = parse_field_values(fields)?;
            output(&client.update_issue(token, key, &values).await?, flags.format)
        }
        IssueCommands::Actions { key } => {
            output(&client.get_available_actions(token, key).await?, flags.format)
        }
        IssueCommands::Transition {
            key,
            action,
            fields,
        } => {
            let values = parse_field_values(fields)?;
            let issue = client
                .progress_workflow_action(token, key, action, &values)
                .await?;
            output(&issue, flags.format)
        }
        IssueCommands::Resolved { key } => {
            let resolved = client.get_resolution_date_by_key(token, key).await?;
            output(&Resolution { key, resolved }, flags.format)
        }
        IssueCommands::Delete { key } => {
            client.delete_issue(token, key).await?;
            output(&Deleted { key, deleted: true }, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn issue_row_falls_back_for_missing_fields() {
        let issue = RemoteIssue {
            key: Some("ABC-1".into()),
            summary: Some("Broken login".into()),
            ..RemoteIssue::default()
        };
        assert_eq!(IssueRow::from(&issue), IssueRow {
            key: "ABC-1",
            status: "-",
            priority: "-",
            assignee: "-",
            summary: "Broken login",
        });
    }
}

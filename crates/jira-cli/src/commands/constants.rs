use jira_core::entities::Constant;
use jira_soap::JiraSoapService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ConstantKind, ConstantsArgs};
use crate::context::AppContext;
use crate::output::output;

/// Common projection of issue types, priorities, statuses and resolutions.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ConstantRow {
    id: String,
    name: String,
    description: Option<String>,
}

impl ConstantRow {
    fn from_constant<T: Constant>(constant: &T) -> Self {
        Self {
            id: constant.id().unwrap_or("-").to_string(),
            name: constant.name().unwrap_or("-").to_string(),
            description: constant.description().map(ToString::to_string),
        }
    }
}

fn rows<T: Constant>(constants: &[T]) -> Vec<ConstantRow> {
    constants.iter().map(ConstantRow::from_constant).collect()
}

/// Handle `jira-soap constants <kind>`.
pub async fn handle(
    args: &ConstantsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.client();
    let token = ctx.token();
    let rows = match args.kind {
        ConstantKind::IssueTypes => rows(&client.get_issue_types(token).await?),
        ConstantKind::SubTaskTypes => rows(&client.get_sub_task_issue_types(token).await?),
        ConstantKind::Priorities => rows(&client.get_priorities(token).await?),
        ConstantKind::Statuses => rows(&client.get_statuses(token).await?),
        ConstantKind::Resolutions => rows(&client.get_resolutions(token).await?),
    };
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use jira_core::entities::{RemotePriority, RemoteStatus};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_project_base_fields() {
        let statuses = vec![RemoteStatus {
            id: Some("1".into()),
            name: Some("Open".into()),
            description: Some("Ready to start".into()),
            ..RemoteStatus::default()
        }];
        assert_eq!(rows(&statuses), vec![ConstantRow {
            id: "1".into(),
            name: "Open".into(),
            description: Some("Ready to start".into()),
        }]);
    }

    #[test]
    fn missing_names_render_as_dash() {
        let priorities = vec![RemotePriority::default()];
        let row = &rows(&priorities)[0];
        assert_eq!(row.id, "-");
        assert_eq!(row.name, "-");
        assert_eq!(row.description, None);
    }
}

use jira_soap::OperationSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OperationsArgs;
use crate::output::output;

fn matching(filter: Option<&str>) -> Vec<OperationSummary> {
    let needle = filter.map(str::to_ascii_lowercase);
    jira_soap::operations()
        .filter(|op| {
            needle
                .as_deref()
                .is_none_or(|needle| op.name.to_ascii_lowercase().contains(needle))
        })
        .map(jira_soap::OperationDescriptor::summary)
        .collect()
}

/// Handle `jira-soap operations`.
pub fn handle(args: &OperationsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut summaries = matching(args.filter.as_deref());
    if let Some(limit) = flags.limit {
        summaries.truncate(usize::try_from(limit)?);
    }
    output(&summaries, flags.format)
}

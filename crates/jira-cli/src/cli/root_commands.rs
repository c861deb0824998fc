use clap::{Args, Subcommand, ValueEnum};

use super::subcommands::{
    CommentCommands, FilterCommands, IssueCommands, ProjectCommands, WorklogCommands,
};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show server version and time
    ServerInfo,
    /// Show server feature configuration
    Configuration,
    /// Issue operations
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// Issue comments
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Work logged on issues
    Worklog {
        #[command(subcommand)]
        action: WorklogCommands,
    },
    /// Projects, versions, and components
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// List issue types, priorities, statuses, or resolutions
    Constants(ConstantsArgs),
    /// Saved filters
    Filter {
        #[command(subcommand)]
        action: FilterCommands,
    },
    /// List the service operations known to this client (offline)
    Operations(OperationsArgs),
    /// Print the JSON schema of a bean type (offline)
    Schema(SchemaArgs),
}

/// Constant families served by the service.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ConstantKind {
    IssueTypes,
    SubTaskTypes,
    Priorities,
    Statuses,
    Resolutions,
}

#[derive(Clone, Debug, Args)]
pub struct ConstantsArgs {
    pub kind: ConstantKind,
}

#[derive(Clone, Debug, Args)]
pub struct OperationsArgs {
    /// Only operations whose wire name contains this text (case-insensitive)
    pub filter: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Bean type name, e.g. `RemoteIssue`
    pub type_name: String,
}

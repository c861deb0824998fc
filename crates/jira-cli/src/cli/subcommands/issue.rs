use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// Fetch an issue by key
    Get { key: String },
    /// Run a JQL query
    Search {
        jql: String,
        /// Maximum number of issues (defaults to --limit, then 50)
        #[arg(long)]
        max: Option<i32>,
    },
    /// Full-text search, optionally restricted to projects
    TextSearch {
        terms: String,
        #[arg(long = "project")]
        projects: Vec<String>,
    },
    /// Create an issue
    Create(IssueCreateArgs),
    /// Set fields on an issue
    Update {
        key: String,
        /// Field assignment `id=value`; repeat the field id for multiple values
        #[arg(long = "field", required = true)]
        fields: Vec<String>,
    },
    /// List workflow actions available on an issue
    Actions { key: String },
    /// Run a workflow action
    Transition {
        key: String,
        /// Action id from `issue actions`
        action: String,
        #[arg(long = "field")]
        fields: Vec<String>,
    },
    /// Show the resolution date of an issue
    Resolved { key: String },
    /// Delete an issue
    Delete { key: String },
}

#[derive(Clone, Debug, Args)]
pub struct IssueCreateArgs {
    /// Project key
    #[arg(long)]
    pub project: String,
    /// Issue type id
    #[arg(long = "type")]
    pub issue_type: String,
    #[arg(long)]
    pub summary: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    /// Priority id
    #[arg(long)]
    pub priority: Option<String>,
    /// Create as a sub-task of this issue
    #[arg(long)]
    pub parent: Option<String>,
}

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum WorklogCommands {
    /// List work logged on an issue
    List { key: String },
    /// Log work and let the server adjust the remaining estimate
    Add(WorklogAddArgs),
    /// Delete a worklog entry
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct WorklogAddArgs {
    pub key: String,
    /// Duration such as `1h 30m`
    pub time_spent: String,
    /// Start time (RFC 3339); defaults to now
    #[arg(long)]
    pub started: Option<DateTime<Utc>>,
    #[arg(long)]
    pub comment: Option<String>,
    /// Set the remaining estimate instead of auto-adjusting it
    #[arg(long)]
    pub remaining: Option<String>,
}

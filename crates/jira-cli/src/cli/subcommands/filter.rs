use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum FilterCommands {
    /// List the user's favourite filters
    List,
    /// Run a saved filter
    Issues { id: String },
    /// Count issues matched by a saved filter
    Count { id: String },
}

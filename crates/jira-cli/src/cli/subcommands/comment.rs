use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// List comments on an issue
    List { key: String },
    /// Add a comment to an issue
    Add {
        key: String,
        body: String,
        /// Restrict visibility to members of this group
        #[arg(long)]
        group: Option<String>,
    },
}

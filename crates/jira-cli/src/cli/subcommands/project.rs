use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects visible to the user
    List,
    /// Fetch a project by key
    Get { key: String },
    /// List versions of a project
    Versions { key: String },
    /// List components of a project
    Components { key: String },
}

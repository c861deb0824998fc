use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `jira-soap` binary.
#[derive(Debug, Parser)]
#[command(name = "jira-soap", version, about = "JIRA SOAP service client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Server base URL (overrides server.base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Login name (overrides auth.username)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
            base_url: self.base_url.clone(),
            user: self.user.clone(),
        }
    }
}

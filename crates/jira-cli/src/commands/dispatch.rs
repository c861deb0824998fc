use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::ServerInfo => commands::server::info(ctx, flags).await,
        Commands::Configuration => commands::server::configuration(ctx, flags).await,
        Commands::Issue { action } => commands::issue::handle(&action, ctx, flags).await,
        Commands::Comment { action } => commands::comment::handle(&action, ctx, flags).await,
        Commands::Worklog { action } => commands::worklog::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Constants(args) => commands::constants::handle(&args, ctx, flags).await,
        Commands::Filter { action } => commands::filter::handle(&action, ctx, flags).await,
        Commands::Operations(_) | Commands::Schema(_) => {
            unreachable!("operations/schema are pre-dispatched in main")
        }
    }
}

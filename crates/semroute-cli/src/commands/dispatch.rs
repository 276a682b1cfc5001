use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => commands::extract::handle(&args, ctx, flags).await,
        Commands::Brief(args) => commands::brief::handle(&args, ctx, flags).await,
        Commands::Index { action } => commands::index::handle(&action, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
    }
}

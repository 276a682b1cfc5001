use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IndexCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `semroute index build|update`.
pub async fn handle(
    action: &IndexCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let indexer = ctx.indexer();
    let summary = match action {
        IndexCommands::Build => indexer.build().await,
        IndexCommands::Update => indexer.update().await,
    }
    .with_context(|| format!("failed to index into {}", indexer.out_dir().display()))?;

    output(&summary, flags.format)
}

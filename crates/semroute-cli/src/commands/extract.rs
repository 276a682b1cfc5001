use std::path::PathBuf;

use semroute_core::ImplementationRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `semroute extract`.
pub async fn handle(args: &ExtractArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = ImplementationRequest {
        project_root: ctx.project_root.clone(),
        file_path: PathBuf::from(&args.file),
        signature: args.signature.clone(),
    };
    let result = ctx.extractor().extract_for_symbol(&request).await;
    output(&result, flags.format)
}

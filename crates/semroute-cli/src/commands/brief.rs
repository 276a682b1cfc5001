use std::path::PathBuf;

use semroute_core::{BriefResponse, ImplementationRequest};
use semroute_llm::{BriefInput, generate_brief};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BriefArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `semroute brief`.
pub async fn handle(args: &BriefArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let implementation = match &args.file {
        Some(file) => {
            let request = ImplementationRequest {
                project_root: ctx.project_root.clone(),
                file_path: PathBuf::from(file),
                signature: args.signature.clone(),
            };
            ctx.extractor().extract_for_symbol(&request).await.implementation
        }
        None => None,
    };

    let input = BriefInput {
        module_name: args.module.clone(),
        signature: args.signature.clone(),
        implementation,
        file_path: args.file.clone(),
    };
    let brief = generate_brief(&ctx.config.llm, &input).await;

    let response = BriefResponse {
        module: input.module_name.clone(),
        signature: input.signature.clone(),
        has_implementation: input.has_implementation(),
        brief,
    };
    output(&response, flags.format)
}

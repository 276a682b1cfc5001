use anyhow::Context;
use semroute_core::{SkillSearchResponse, SkillSearchResult};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `semroute search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index_dir = ctx.index_dir();
    let results = semroute_index::search_skills(&index_dir, &args.query)
        .await
        .with_context(|| format!("failed to search skill index at {}", index_dir.display()))?;

    output(&build_response(&args.query, results, flags.limit), flags.format)
}

/// `total_results` counts every match before `limit` is applied.
fn build_response(
    query: &str,
    mut results: Vec<SkillSearchResult>,
    limit: Option<u32>,
) -> SkillSearchResponse {
    let total_results = u32::try_from(results.len()).unwrap_or(u32::MAX);
    if let Some(limit) = limit {
        results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    SkillSearchResponse {
        query: query.to_string(),
        results,
        total_results,
    }
}

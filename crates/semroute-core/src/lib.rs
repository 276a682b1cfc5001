//! # semroute-core
//!
//! Types shared across semroute crates:
//! - Implementation extraction request/result records
//! - Skill search results and index build summaries
//! - Symbol brief responses returned by the CLI

pub mod responses;

pub use responses::{
    BriefResponse, ImplementationRequest, ImplementationResult, IndexSummary, SkillSearchResult,
    SkillSearchResponse,
};

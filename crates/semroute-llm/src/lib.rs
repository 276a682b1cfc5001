//! # semroute-llm
//!
//! OpenAI-compatible chat-completion client for semroute.
//!
//! - [`ChatClient`] issues a single `POST <base>/chat/completions` with a
//!   bearer token and surfaces transport or status failures as [`LlmError`].
//! - [`brief`] turns a symbol's signature and extracted implementation into a
//!   one-sentence description, degrading to a fallback text on any failure.

pub mod brief;
mod client;
mod error;
mod http;

pub use brief::{BriefInput, fallback_brief, generate_brief};
pub use client::{ChatClient, ChatMessage, ChatPayload, Role, resolve_base_url};
pub use error::LlmError;

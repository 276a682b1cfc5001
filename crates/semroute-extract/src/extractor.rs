//! Extraction entry points: signature + source text → capped body.

use semroute_core::{ImplementationRequest, ImplementationResult};

use crate::loader::load_source;
use crate::locator::find_implementation_block;
use crate::signature::extract_function_name;
use crate::truncate::{TruncateLimits, truncate_with_limits};
use crate::NotFound;

/// Stateless extractor carrying the output caps.
///
/// Holds no mutable state, so one value can serve concurrent requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    limits: TruncateLimits,
}

impl Extractor {
    #[must_use]
    pub const fn new(limits: TruncateLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> TruncateLimits {
        self.limits
    }

    /// Extract the body of the definition named by `signature` from `code`.
    ///
    /// # Errors
    ///
    /// Returns the [`NotFound`] reason when no body can be extracted safely.
    pub fn extract_from_text(&self, code: &str, signature: &str) -> Result<String, NotFound> {
        let name = extract_function_name(signature).ok_or(NotFound::UnresolvableName)?;
        let block = find_implementation_block(code, name)?;
        Ok(truncate_with_limits(block, self.limits))
    }

    /// Load the request's file and extract the symbol's body from it.
    ///
    /// Never fails: every absence becomes `implementation: None`.
    pub async fn extract_for_symbol(&self, request: &ImplementationRequest) -> ImplementationResult {
        let implementation = match load_source(&request.project_root, &request.file_path).await {
            Some(code) => self.extract_from_text(&code, &request.signature),
            None => Err(NotFound::Unreadable),
        };

        match implementation {
            Ok(body) => ImplementationResult {
                implementation: Some(body),
            },
            Err(reason) => {
                tracing::debug!(
                    file = %request.file_path.display(),
                    signature = %request.signature,
                    %reason,
                    "no implementation extracted"
                );
                ImplementationResult::default()
            }
        }
    }
}

/// [`Extractor::extract_from_text`] with the default caps.
///
/// # Errors
///
/// Returns the [`NotFound`] reason when no body can be extracted safely.
pub fn extract_from_text(code: &str, signature: &str) -> Result<String, NotFound> {
    Extractor::default().extract_from_text(code, signature)
}

/// [`Extractor::extract_for_symbol`] with the default caps.
pub async fn extract_for_symbol(request: &ImplementationRequest) -> ImplementationResult {
    Extractor::default().extract_for_symbol(request).await
}

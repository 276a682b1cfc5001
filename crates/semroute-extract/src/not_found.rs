//! Typed absence marker for extraction.

use std::fmt;

/// Why no implementation body was returned.
///
/// This is an expected outcome, not a fault: callers degrade to working
/// without the body. It deliberately does not implement `std::error::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFound {
    /// The signature has no `identifier (` to derive a name from.
    UnresolvableName,
    /// No occurrence of the name is followed by a parameter list and a body.
    NoDefinition,
    /// A candidate parameter list runs to end of input without closing.
    UnbalancedParams,
    /// A candidate body runs to end of input without closing.
    UnbalancedBody,
    /// The source file could not be read as text.
    Unreadable,
}

impl NotFound {
    /// Short machine-friendly reason, used as a tracing field.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::UnresolvableName => "unresolvable_name",
            Self::NoDefinition => "no_definition",
            Self::UnbalancedParams => "unbalanced_params",
            Self::UnbalancedBody => "unbalanced_body",
            Self::Unreadable => "unreadable",
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

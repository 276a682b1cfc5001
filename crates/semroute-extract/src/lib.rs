//! # semroute-extract
//!
//! Locates a function or method definition in raw source text from nothing
//! but its declared signature, and returns the body between its braces.
//!
//! No parse tree is built. The scan relies on:
//! - name matching with identifier word boundaries
//! - `()` / `{}` delimiter balancing
//! - skipping trailing `const` / `noexcept` qualifiers
//!
//! Unbalanced structure always yields [`NotFound`] rather than a guessed
//! body. Bodies are capped by [`truncate`] before being returned.
//!
//! ```
//! use semroute_extract::extract_from_text;
//!
//! let code = "int f(int); int f(int x) { return x * 2; }";
//! assert_eq!(extract_from_text(code, "int f(int x)").as_deref(), Ok("return x * 2;"));
//! ```

mod extractor;
pub mod loader;
pub mod locator;
mod not_found;
pub mod signature;
pub mod truncate;

pub use extractor::{Extractor, extract_for_symbol, extract_from_text};
pub use loader::load_source;
pub use locator::find_implementation_block;
pub use not_found::NotFound;
pub use signature::extract_function_name;
pub use truncate::{TruncateLimits, truncate_implementation};

//! Delimiter-balanced body location over unparsed source text.
//!
//! The scan is a cursor-driven state machine:
//!
//! ```text
//! SeekingName ──boundary ok──▶ MatchingParams ──balanced──▶ SkippingQualifiers
//!      ▲                                                          │
//!      └──────────── no `{` after qualifiers (retry) ─────────────┤
//!                                                                 ▼
//!                                                           MatchingBody ──▶ body
//! ```
//!
//! Declarations, call sites and comments that mention the name fall back to
//! `SeekingName` past the occurrence. Running out of input while balancing
//! `()` or `{}` ends the scan with absence; a body is never guessed.
//!
//! Every retry restarts strictly after the previous occurrence, so the scan
//! terminates after at most one pass per occurrence of the name.

use crate::NotFound;

const QUALIFIERS: [&str; 2] = ["const", "noexcept"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingName {
        from: usize,
    },
    MatchingParams {
        occurrence_end: usize,
    },
    SkippingQualifiers {
        occurrence_end: usize,
        cursor: usize,
    },
    MatchingBody {
        open_brace: usize,
    },
}

/// Find the first structurally valid definition of `name` in `code` and
/// return the text between its outer braces, trimmed.
///
/// A structural match is `name`, delimited by non-identifier characters, then
/// a balanced `(...)`, optional `const` and `noexcept`, and a balanced `{...}`.
/// When several overloads share the name, the first one in the text wins.
///
/// # Errors
///
/// - [`NotFound::UnresolvableName`] for an empty `name`
/// - [`NotFound::NoDefinition`] when no occurrence forms a definition
/// - [`NotFound::UnbalancedParams`] / [`NotFound::UnbalancedBody`] when a
///   candidate's delimiters never close
pub fn find_implementation_block<'a>(code: &'a str, name: &str) -> Result<&'a str, NotFound> {
    if name.is_empty() {
        return Err(NotFound::UnresolvableName);
    }

    let mut state = State::SeekingName { from: 0 };
    loop {
        state = match state {
            State::SeekingName { from } => {
                let found = code[from..]
                    .find(name)
                    .map(|offset| from + offset)
                    .ok_or(NotFound::NoDefinition)?;
                let occurrence_end = found + name.len();
                if is_word_bounded(code, found, occurrence_end) {
                    State::MatchingParams { occurrence_end }
                } else {
                    State::SeekingName {
                        from: occurrence_end,
                    }
                }
            }
            State::MatchingParams { occurrence_end } => {
                let open_paren = code[occurrence_end..]
                    .find('(')
                    .map(|offset| occurrence_end + offset)
                    .ok_or(NotFound::NoDefinition)?;
                let close_paren = matching_close(code, open_paren, b'(', b')')
                    .ok_or(NotFound::UnbalancedParams)?;
                State::SkippingQualifiers {
                    occurrence_end,
                    cursor: skip_whitespace(code, close_paren + 1),
                }
            }
            State::SkippingQualifiers {
                occurrence_end,
                cursor,
            } => {
                let cursor = skip_qualifiers(code, cursor);
                if code.as_bytes().get(cursor) == Some(&b'{') {
                    State::MatchingBody { open_brace: cursor }
                } else {
                    tracing::trace!(name, offset = occurrence_end, "occurrence is not a definition");
                    State::SeekingName {
                        from: occurrence_end,
                    }
                }
            }
            State::MatchingBody { open_brace } => {
                let close_brace = matching_close(code, open_brace, b'{', b'}')
                    .ok_or(NotFound::UnbalancedBody)?;
                return Ok(code[open_brace + 1..close_brace].trim());
            }
        };
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_bounded(code: &str, start: usize, end: usize) -> bool {
    let before_ok = code[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_identifier_char(c));
    let after_ok = code[end..]
        .chars()
        .next()
        .is_none_or(|c| !is_identifier_char(c));
    before_ok && after_ok
}

/// Byte index of the delimiter that brings nesting back to zero, starting
/// from the opening delimiter at `open_at`.
///
/// Scanning bytes is sound for UTF-8 input: the ASCII delimiters never occur
/// inside a multi-byte sequence.
fn matching_close(code: &str, open_at: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in code.as_bytes()[open_at..].iter().enumerate() {
        if byte == open {
            depth += 1;
        } else if byte == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(open_at + offset);
            }
        }
    }
    None
}

fn skip_whitespace(code: &str, cursor: usize) -> usize {
    let skipped: usize = code[cursor..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    cursor + skipped
}

/// Consume at most one `const` and then at most one `noexcept`, each with
/// trailing whitespace.
fn skip_qualifiers(code: &str, mut cursor: usize) -> usize {
    for qualifier in QUALIFIERS {
        if code[cursor..].starts_with(qualifier) {
            cursor = skip_whitespace(code, cursor + qualifier.len());
        }
    }
    cursor
}

//! Size caps for extracted bodies.

/// Default line cap.
pub const MAX_LINES: usize = 80;

/// Default character cap, applied after the line cap.
pub const MAX_CHARS: usize = 4000;

/// Appended on its own line whenever anything was cut.
pub const TRUNCATION_MARKER: &str = "// truncated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateLimits {
    pub max_lines: usize,
    pub max_chars: usize,
}

impl Default for TruncateLimits {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            max_chars: MAX_CHARS,
        }
    }
}

/// Cap `body` at [`MAX_LINES`] lines and [`MAX_CHARS`] characters.
#[must_use]
pub fn truncate_implementation(body: &str) -> String {
    truncate_with_limits(body, TruncateLimits::default())
}

/// Keep the first `max_lines` lines, then at most `max_chars` characters.
///
/// Characters are Unicode scalar values; a cut never splits one. When either
/// cap removed text, [`TRUNCATION_MARKER`] is appended after a newline.
#[must_use]
pub fn truncate_with_limits(body: &str, limits: TruncateLimits) -> String {
    let line_capped = match limits.max_lines.checked_sub(1) {
        None => "",
        Some(last) => body
            .match_indices('\n')
            .nth(last)
            .map_or(body, |(newline, _)| &body[..newline]),
    };

    let capped = line_capped
        .char_indices()
        .nth(limits.max_chars)
        .map_or(line_capped, |(cut, _)| &line_capped[..cut]);

    if capped.len() < body.len() {
        format!("{capped}\n{TRUNCATION_MARKER}")
    } else {
        capped.to_string()
    }
}

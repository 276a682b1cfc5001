//! Property tests for body extraction and truncation over generated input.

use proptest::prelude::*;
use semroute_extract::truncate::{TRUNCATION_MARKER, TruncateLimits, truncate_with_limits};
use semroute_extract::{Extractor, extract_from_text};

/// Brace-free statement text; parentheses are allowed inside bodies.
fn statement_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z0-9 ;=+*()\n\t]{0,16}").expect("Valid regex for statements")
}

/// Text whose `{` / `}` are balanced, nested a few levels deep.
fn balanced_body() -> impl Strategy<Value = String> {
    statement_text().prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(
            prop_oneof![inner.clone(), inner.prop_map(|block| format!("{{{block}}}"))],
            1..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

fn uncapped() -> Extractor {
    Extractor::new(TruncateLimits {
        max_lines: usize::MAX,
        max_chars: usize::MAX,
    })
}

proptest! {
    #[test]
    fn balanced_body_is_returned_trimmed(body in balanced_body()) {
        let code = format!("int compute(int n, const int* v) {{{body}}}\n");
        let extracted = uncapped().extract_from_text(&code, "int compute(int n, const int* v)");
        prop_assert_eq!(extracted.as_deref(), Ok(body.trim()));
    }

    #[test]
    fn body_survives_a_leading_declaration(body in balanced_body()) {
        let code = format!("int compute(int n);\n// compute(n) below\nint compute(int n) {{{body}}}");
        let extracted = uncapped().extract_from_text(&code, "int compute(int n)");
        prop_assert_eq!(extracted.as_deref(), Ok(body.trim()));
    }

    #[test]
    fn extraction_is_deterministic(code in any::<String>(), signature in "[a-z_:~ ]{0,12}\\(\\)") {
        prop_assert_eq!(
            extract_from_text(&code, &signature),
            extract_from_text(&code, &signature)
        );
    }

    #[test]
    fn truncation_respects_both_caps(
        body in prop::string::string_regex(r"[a-zé;\n ]{0,300}").expect("Valid regex for bodies"),
        max_lines in 1usize..20,
        max_chars in 1usize..200,
    ) {
        let out = truncate_with_limits(&body, TruncateLimits { max_lines, max_chars });
        let marker = format!("\n{TRUNCATION_MARKER}");
        let kept = out.strip_suffix(marker.as_str()).unwrap_or(&out);

        prop_assert!(body.starts_with(kept));
        prop_assert!(kept.split('\n').count() <= max_lines);
        prop_assert!(kept.chars().count() <= max_chars);
        prop_assert_eq!(out.ends_with(marker.as_str()), kept.len() < body.len());
    }
}

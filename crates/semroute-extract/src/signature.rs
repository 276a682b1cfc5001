//! Callable name extraction from declared signatures.

use std::sync::LazyLock;

use regex::Regex;

/// `<name> (` where the name may carry `::` scopes and a leading `~`.
static CALLABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([~A-Za-z_][A-Za-z0-9_:]*)\s*\(").expect("callable regex is valid")
});

/// Extract the callable identifier from a declared signature.
///
/// Every `identifier (` in the signature is considered and the last one wins,
/// so return types and template arguments written before the name are
/// skipped. Returns `None` when no identifier is followed by `(`.
///
/// # Examples
///
/// ```
/// use semroute_extract::extract_function_name;
///
/// assert_eq!(extract_function_name("void Widget::draw() const"), Some("Widget::draw"));
/// assert_eq!(extract_function_name("~Widget()"), Some("~Widget"));
/// assert_eq!(extract_function_name("int value"), None);
/// ```
#[must_use]
pub fn extract_function_name(signature: &str) -> Option<&str> {
    CALLABLE_RE
        .captures_iter(signature)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

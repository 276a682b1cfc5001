//! Placeholder skill block for a source file.
//!
//! The layout is fixed so search titles and section headings stay stable;
//! section bodies are filled in by later summarization passes.

const PENDING: &str = "_Not yet summarized._";

const SECTIONS: [&str; 6] = [
    "Role",
    "Exports",
    "Usage",
    "Side Effects",
    "Thread Safety",
    "File Mapping",
];

/// Render the Markdown skill block for `relative_path`.
#[must_use]
pub fn summarize_file(code: &str, relative_path: &str) -> String {
    let mut lines = vec![
        String::from("# Skill Block"),
        String::new(),
        format!("Module: {relative_path}"),
        format!("Path: {relative_path}"),
        format!("Lines: {}", code.lines().count()),
    ];
    for section in SECTIONS {
        lines.push(String::new());
        lines.push(format!("## {section}"));
        lines.push(PENDING.to_string());
    }
    lines.push(String::new());
    lines.join("\n")
}

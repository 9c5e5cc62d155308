// Markdown report rendering

use crate::model::{DocumentationMap, FileOutcome, ProjectDocumentationMap};
use std::fmt::Write;

/// Render one file's documentation as a Markdown fragment.
///
/// ```text
/// # Documentation for <file>
///
/// ## <definition>
///
/// <docstring>
///
/// ```
pub fn render_file(file_name: &str, docs: &DocumentationMap) -> String {
    let mut out = String::new();
    push_heading(&mut out, file_name);

    for (name, doc) in docs.iter() {
        let _ = write!(out, "## {}\n\n{}\n\n", name, doc);
    }

    out
}

/// Fragment for a file that was skipped because it failed to parse
pub fn render_skipped(file_name: &str, reason: &str) -> String {
    let mut out = String::new();
    push_heading(&mut out, file_name);
    let _ = write!(out, "> Skipped: {}\n\n", reason);
    out
}

/// Concatenate every file's fragment in scan order
pub fn render_report(project: &ProjectDocumentationMap) -> String {
    project
        .entries()
        .map(|file| match &file.outcome {
            FileOutcome::Documented(docs) => render_file(&file.file_name, docs),
            FileOutcome::Skipped(reason) => render_skipped(&file.file_name, reason),
        })
        .collect()
}

fn push_heading(out: &mut String, file_name: &str) {
    let _ = write!(out, "# Documentation for {}\n\n", file_name);
}

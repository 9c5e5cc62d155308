// Output generation module

pub mod json;
pub mod markdown;
pub mod writer;

pub use json::render_json;
pub use markdown::{render_file, render_report, render_skipped};
pub use writer::write_report;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::ProjectDocumentationMap;

/// Render the project map in the requested format
pub fn render(project: &ProjectDocumentationMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_report(project)),
        OutputFormat::Json => render_json(project),
    }
}

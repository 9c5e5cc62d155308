// JSON report rendering

use crate::error::Result;
use crate::model::ProjectDocumentationMap;

/// Render the whole project map as pretty-printed JSON with a trailing newline
pub fn render_json(project: &ProjectDocumentationMap) -> Result<String> {
    let mut out = serde_json::to_string_pretty(project)?;
    out.push('\n');
    Ok(out)
}

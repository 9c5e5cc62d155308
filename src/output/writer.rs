// Report persistence

use crate::error::{Error, Result};
use std::path::Path;

/// Create or truncate `output` and write `report` to it as UTF-8
pub fn write_report(report: &str, output: &Path) -> Result<()> {
    std::fs::write(output, report.as_bytes()).map_err(|e| Error::write(output, e))
}

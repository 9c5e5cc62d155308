//! Scan -> render -> write, with explicit inputs and a typed result.

use crate::config::Config;
use crate::error::Result;
use crate::output::{render, write_report};
use crate::scanner::Scanner;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Files parsed successfully
    pub files: usize,
    /// Documented definitions across all files
    pub definitions: usize,
    /// Files left out because they failed to parse
    pub skipped: usize,
    pub output: PathBuf,
}

/// Runs the documentation pipeline for one directory
pub struct Pipeline {
    config: Config,
    verbose: bool,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Show a progress bar while scanning
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Document `directory` into `output`.
    ///
    /// The output file is only touched once every file has been scanned and
    /// the whole report rendered in memory.
    pub fn run(&self, directory: &Path, output: &Path) -> Result<Summary> {
        let mut scanner = Scanner::new(self.config.scan.clone())?.with_verbose(self.verbose);
        let project = scanner.scan(directory)?;

        let report = render(&project, self.config.output.format)?;
        info!(
            format = ?self.config.output.format,
            bytes = report.len(),
            "rendered report"
        );

        write_report(&report, output)?;
        info!(output = %output.display(), "report written");

        let skipped = project.skipped().len();
        Ok(Summary {
            files: project.len() - skipped,
            definitions: project.definition_count(),
            skipped,
            output: output.to_path_buf(),
        })
    }
}

/// Document `directory` into `output` with the given configuration
pub fn generate(directory: &Path, output: &Path, config: &Config) -> Result<Summary> {
    Pipeline::new(config.clone()).run(directory, output)
}

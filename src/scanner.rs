// Directory scanning: one level deep, extension-filtered, sorted by file name

use crate::config::{OnSyntaxError, ScanConfig};
use crate::error::{Error, Result};
use crate::model::ProjectDocumentationMap;
use crate::parser::DocParser;
use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Collects the documentation of every eligible file in a directory
pub struct Scanner {
    config: ScanConfig,
    parser: DocParser,
    verbose: bool,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Result<Self> {
        let parser = DocParser::new()?;

        Ok(Self {
            config,
            parser,
            verbose: false,
        })
    }

    /// Create scanner with a progress bar
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan a directory and extract documentation from each eligible file
    pub fn scan(&mut self, directory: &Path) -> Result<ProjectDocumentationMap> {
        let files = self.discover_files(directory)?;
        info!(
            directory = %directory.display(),
            files = files.len(),
            "scanning source files"
        );

        let progress = self.progress_bar(files.len());
        let mut project = ProjectDocumentationMap::new();

        for path in &files {
            let file_name = file_name_of(path);
            if let Some(ref pb) = progress {
                pb.set_message(file_name.clone());
                pb.inc(1);
            }
            debug!(file = %file_name, "extracting docstrings");

            match self.parser.extract_file(path) {
                Ok(docs) => {
                    debug!(file = %file_name, definitions = docs.len(), "extracted");
                    project.insert(file_name, docs);
                }
                Err(Error::Syntax {
                    line,
                    column,
                    message,
                    ..
                }) if self.config.on_syntax_error == OnSyntaxError::Skip => {
                    let reason = format!(
                        "syntax error at line {}, column {}: {}",
                        line, column, message
                    );
                    warn!(file = %file_name, %reason, "skipping file");
                    project.skip(file_name, reason);
                }
                Err(e) => {
                    if let Some(ref pb) = progress {
                        pb.abandon();
                    }
                    return Err(e);
                }
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(project)
    }

    /// List the directory's eligible files, sorted by name
    pub fn discover_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        if !directory.exists() {
            return Err(Error::PathNotFound(directory.to_path_buf()));
        }
        if !directory.is_dir() {
            return Err(Error::NotADirectory(directory.to_path_buf()));
        }

        let excludes = self
            .config
            .exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();

        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;

            let Some(name) = entry.file_name().to_str() else {
                debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
                continue;
            };

            if !name.ends_with(&self.config.extension) {
                continue;
            }

            if excludes.iter().any(|p| p.matches(name)) {
                debug!(file = name, "excluded by pattern");
                continue;
            }

            // Symlinks resolve to their target; directories named like source files are skipped
            let metadata = std::fs::metadata(entry.path()).map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", entry.path().display(), e),
                ))
            })?;
            if !metadata.is_file() {
                continue;
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if !self.verbose {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .map(|s| s.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        Some(pb)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

//! Docmark - Markdown documentation from Python docstrings
//!
//! Scans a directory of Python files, extracts the docstrings of top-level
//! functions and classes, and writes them into a single Markdown report.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod scanner;

// Re-export main types
pub use config::{Config, OnSyntaxError, OutputFormat, ScanConfig};
pub use error::{Error, Result};
pub use model::{DocumentationMap, ProjectDocumentationMap, SkippedFile};
pub use output::{render_file, render_json, render_report, write_report};
pub use parser::DocParser;
pub use pipeline::{generate, Pipeline, Summary};
pub use scanner::Scanner;

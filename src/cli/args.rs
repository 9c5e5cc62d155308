//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate Markdown documentation from Python docstrings
#[derive(Parser, Debug)]
#[command(name = "docmark")]
#[command(about = "Generate Markdown documentation from Python docstrings")]
#[command(version)]
pub struct Args {
    /// Directory containing the source files (prompted for when omitted)
    pub directory: Option<PathBuf>,

    /// Output file (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source-file suffix to scan for
    #[arg(long)]
    pub extension: Option<String>,

    /// File-name globs to exclude (can be repeated)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Output format (markdown, json)
    #[arg(long, value_parser = ["markdown", "md", "json"])]
    pub format: Option<String>,

    /// Skip files with syntax errors instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

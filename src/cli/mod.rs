//! CLI module for docmark

mod args;

pub use args::Args;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::logging;
use crate::pipeline::Pipeline;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

const DIRECTORY_PROMPT: &str = "Enter the directory containing Python files: ";
const OUTPUT_PROMPT: &str = "Enter the output Markdown file name (e.g., documentation.md): ";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match execute(args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve inputs, prompting for whatever the arguments left out, then run the pipeline
pub fn execute<R: BufRead, W: Write>(args: Args, input: &mut R, out: &mut W) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    cfg.merge_cli(args.extension, args.exclude, args.format, args.skip_invalid);
    cfg.validate()?;
    debug!(?cfg, "resolved configuration");

    let directory = match args.directory {
        Some(dir) => dir,
        None => PathBuf::from(prompt(input, out, DIRECTORY_PROMPT)?),
    };
    let output = match args.output {
        Some(path) => path,
        None => PathBuf::from(prompt(input, out, OUTPUT_PROMPT)?),
    };

    let summary = Pipeline::new(cfg)
        .with_verbose(args.verbose)
        .run(&directory, &output)?;

    if args.verbose {
        writeln!(
            out,
            "Documented {} definitions in {} files",
            summary.definitions, summary.files
        )?;
        if summary.skipped > 0 {
            writeln!(out, "Skipped {} files with syntax errors", summary.skipped)?;
        }
    }
    writeln!(
        out,
        "Documentation generated and saved to {}",
        summary.output.display()
    )?;

    Ok(())
}

/// Print `message` and read one line of input, without its line ending
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input provided",
        )));
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

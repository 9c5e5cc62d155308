use std::path::PathBuf;
use thiserror::Error;

/// Docmark error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Syntax error in {path} at line {line}, column {column}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Parser error: {0}")]
    Parser(String),
}

/// Result type alias for docmark operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a syntax error at a 1-based line and column
    pub fn syntax(
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Error::Syntax {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a write error for the given output path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a parser error
    pub fn parser(msg: impl Into<String>) -> Self {
        Error::Parser(msg.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}

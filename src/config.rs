use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "docmark.toml";

/// Recognized source-file suffix
pub const DEFAULT_EXTENSION: &str = ".py";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Directory scanning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Only file names ending with this suffix are parsed
    pub extension: String,
    /// File-name globs to leave out
    pub exclude: Vec<String>,
    pub on_syntax_error: OnSyntaxError,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// What the scanner does with a file that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnSyntaxError {
    /// Stop the whole run; nothing is written
    #[default]
    Abort,
    /// Leave the file out and note it in the report
    Skip,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: vec![],
            on_syntax_error: OnSyntaxError::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, or return defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        extension: Option<String>,
        exclude: Vec<String>,
        format: Option<String>,
        skip_invalid: bool,
    ) {
        if let Some(ext) = extension {
            self.scan.extension = ext;
        }

        if !exclude.is_empty() {
            self.scan.exclude.extend(exclude);
        }

        if let Some(fmt) = format {
            self.output.format = match fmt.as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Markdown,
            };
        }

        if skip_invalid {
            self.scan.on_syntax_error = OnSyntaxError::Skip;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.extension.is_empty() {
            return Err(Error::config_validation("extension must not be empty"));
        }

        if self.scan.extension.contains(|c| c == '/' || c == '\\') {
            return Err(Error::config_validation(
                "extension must not contain a path separator",
            ));
        }

        for pattern in &self.scan.exclude {
            glob::Pattern::new(pattern)?;
        }

        Ok(())
    }
}

//! Configuration System
//!
//! Layered TOML configuration: built-in defaults, the global config file, then
//! workspace config files. CLI flags override the merged result per command.

use crate::logging::LoggingConfig;
use crate::output::WriteMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropgenConfig {
    /// Default inputs and output for `propgen generate`
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generator inputs and output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Header template path
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// Property data file path
    #[serde(default)]
    pub data: Option<PathBuf>,

    /// Output path, or "-" for stdout
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// File write policy
    #[serde(default)]
    pub write_mode: WriteMode,
}

impl GenerateConfig {
    /// Resolve relative paths against the workspace root. "-" is left alone.
    pub fn resolve_paths(&self, workspace_root: &Path) -> GenerateConfig {
        let resolve = |p: &Option<PathBuf>| {
            p.as_ref().map(|p| {
                if p.is_absolute() || p.as_os_str() == "-" {
                    p.clone()
                } else {
                    workspace_root.join(p)
                }
            })
        };
        GenerateConfig {
            template: resolve(&self.template),
            data: resolve(&self.data),
            output: resolve(&self.output),
            write_mode: self.write_mode,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("template", &self.template),
            ("data", &self.data),
            ("output", &self.output),
        ] {
            if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(format!("'{}' path cannot be empty", key));
            }
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Generate(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Generate(msg) => write!(f, "Generate: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PropgenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generate.validate() {
            errors.push(ValidationError::Generate(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

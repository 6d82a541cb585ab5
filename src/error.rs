//! Error types for the property ID generator.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Template parsing and substitution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Invalid placeholder in template: line {line}, col {col}")]
    InvalidPlaceholder { line: usize, col: usize },

    #[error("Missing value for template placeholder: {0}")]
    MissingKey(String),
}

/// Property data file errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Property '{property}' is missing attribute '{attribute}'")]
    MissingAttribute {
        property: String,
        attribute: &'static str,
    },

    #[error("Property '{0}' is defined more than once")]
    DuplicateProperty(String),

    #[error("Property '{property}' has invalid identifier '{identifier}'")]
    InvalidIdentifier { property: String, identifier: String },

    #[error("Alias '{alias}' targets unknown property '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
}

/// What kind of ordering rule an entry broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    LonghandAfterShorthand,
    ShorthandAfterAlias,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::LonghandAfterShorthand => write!(f, "longhand after a shorthand"),
            ViolationKind::ShorthandAfterAlias => write!(f, "shorthand after an alias"),
        }
    }
}

/// A single entry out of group order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingViolation {
    pub position: usize,
    pub property: String,
    pub kind: ViolationKind,
}

impl fmt::Display for OrderingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} '{}': {}",
            self.position, self.property, self.kind
        )
    }
}

/// Group ordering errors; carries every violation found in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Property table is out of order:\n{}", format_violations(.0))]
pub struct OrderingError(pub Vec<OrderingViolation>);

fn format_violations(violations: &[OrderingViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Boundary marker lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot derive marker '{marker}': index {index} is past the end of {len} property ids")]
pub struct MarkerError {
    pub marker: &'static str,
    pub index: usize,
    pub len: usize,
}

/// Output sink errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output {path:?} is stale (expected digest {expected}, found {found})")]
    Stale {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Output {0:?} does not exist")]
    Missing(PathBuf),
}

/// Top-level error for generator commands
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to read template {path:?}: {source}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("{0}")]
    Ordering(#[from] OrderingError),

    #[error("{0}")]
    Marker(#[from] MarkerError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Failed to write generated output: {0}")]
    Sink(#[source] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for GenerateError {
    fn from(err: config::ConfigError) -> Self {
        GenerateError::ConfigError(err.to_string())
    }
}

//! Output targets for generated files.
//!
//! Generated headers feed incremental builds, so a file target can skip the
//! write when its content is already current. Content is compared by blake3
//! digest.

use crate::error::OutputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where generated content goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn parse(value: &Path) -> Self {
        if value.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(value.to_path_buf())
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// File write policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    Always,
    #[default]
    IfChanged,
}

impl std::str::FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(WriteMode::Always),
            "if-changed" => Ok(WriteMode::IfChanged),
            other => Err(format!(
                "Invalid write mode: {} (must be 'always' or 'if-changed')",
                other
            )),
        }
    }
}

/// What happened to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
    UpToDate,
}

/// Outcome of writing or checking a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub target: OutputTarget,
    pub status: WriteStatus,
    pub digest: String,
    pub bytes: usize,
}

pub fn digest(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, OutputError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(OutputError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `content` to the file at `path`, honoring the write policy.
pub fn write_output(path: &Path, content: &str, mode: WriteMode) -> Result<WriteOutcome, OutputError> {
    let new_digest = digest(content.as_bytes());
    let outcome = |status| WriteOutcome {
        target: OutputTarget::File(path.to_path_buf()),
        status,
        digest: new_digest.clone(),
        bytes: content.len(),
    };

    if mode == WriteMode::IfChanged {
        if let Some(existing) = read_existing(path)? {
            if digest(&existing) == new_digest {
                debug!(path = %path.display(), digest = %new_digest, "Output unchanged, skipping write");
                return Ok(outcome(WriteStatus::Unchanged));
            }
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content.as_bytes()).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), digest = %new_digest, bytes = content.len(), "Wrote output");
    Ok(outcome(WriteStatus::Written))
}

/// Compare `content` with the file at `path` without writing.
pub fn check_output(path: &Path, content: &str) -> Result<WriteOutcome, OutputError> {
    let expected = digest(content.as_bytes());
    let existing = read_existing(path)?.ok_or_else(|| OutputError::Missing(path.to_path_buf()))?;
    let found = digest(&existing);
    if found != expected {
        return Err(OutputError::Stale {
            path: path.to_path_buf(),
            expected,
            found,
        });
    }
    Ok(WriteOutcome {
        target: OutputTarget::File(path.to_path_buf()),
        status: WriteStatus::UpToDate,
        digest: expected,
        bytes: content.len(),
    })
}

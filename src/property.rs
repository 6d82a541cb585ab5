//! Property definition table.
//!
//! The table is an ordered list of CSS property descriptors read from a
//! declarative data file. Entry order is significant: it is the order in
//! which property IDs are emitted.

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Longhand,
    Shorthand,
    Alias,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Longhand => "longhand",
            PropertyKind::Shorthand => "shorthand",
            PropertyKind::Alias => "alias",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property definition.
///
/// Longhands and shorthands carry an `id`; aliases carry an `alias_id` and
/// optionally the name of the property they alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    kind: PropertyKind,
    ident: String,
    target: Option<String>,
}

impl PropertyDescriptor {
    pub fn longhand(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Longhand,
            ident: id.into(),
            target: None,
        }
    }

    pub fn shorthand(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Shorthand,
            ident: id.into(),
            target: None,
        }
    }

    pub fn alias(name: impl Into<String>, alias_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Alias,
            ident: alias_id.into(),
            target: None,
        }
    }

    /// Set the aliased property name. Only meaningful for aliases.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Identifier of a longhand or shorthand; `None` for aliases.
    pub fn id(&self) -> Option<&str> {
        match self.kind {
            PropertyKind::Alias => None,
            _ => Some(&self.ident),
        }
    }

    /// Identifier of an alias; `None` for longhands and shorthands.
    pub fn alias_id(&self) -> Option<&str> {
        match self.kind {
            PropertyKind::Alias => Some(&self.ident),
            _ => None,
        }
    }

    /// The identifier for this descriptor's kind.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// One entry as written in the data file.
#[derive(Debug, Clone, Deserialize)]
struct PropertyRecord {
    name: String,
    #[serde(rename = "type")]
    kind: PropertyKind,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    alias_id: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyFile {
    #[serde(default)]
    property: Vec<PropertyRecord>,
}

impl TryFrom<PropertyRecord> for PropertyDescriptor {
    type Error = DataError;

    fn try_from(record: PropertyRecord) -> Result<Self, Self::Error> {
        let missing = |attribute| DataError::MissingAttribute {
            property: record.name.clone(),
            attribute,
        };
        let descriptor = match record.kind {
            PropertyKind::Longhand => {
                let id = record.id.clone().ok_or_else(|| missing("id"))?;
                PropertyDescriptor::longhand(record.name.clone(), id)
            }
            PropertyKind::Shorthand => {
                let id = record.id.clone().ok_or_else(|| missing("id"))?;
                PropertyDescriptor::shorthand(record.name.clone(), id)
            }
            PropertyKind::Alias => {
                let alias_id = record.alias_id.clone().ok_or_else(|| missing("alias_id"))?;
                PropertyDescriptor::alias(record.name.clone(), alias_id)
            }
        };

        match (record.target, record.kind) {
            (Some(target), PropertyKind::Alias) => Ok(descriptor.with_target(target)),
            (Some(target), kind) => {
                warn!(
                    property = %record.name,
                    %kind,
                    %target,
                    "Ignoring alias target on a non-alias property"
                );
                Ok(descriptor)
            }
            (None, _) => Ok(descriptor),
        }
    }
}

/// Data file format, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DataFormat::Json,
            _ => DataFormat::Toml,
        }
    }
}

/// Ordered property definition table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: Vec<PropertyDescriptor>,
}

impl PropertyTable {
    /// Load and validate a table from a TOML or JSON data file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = DataFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Loading property data");
        Self::parse(&contents, format).map_err(|e| match e {
            DataError::Parse { message, .. } => DataError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse and validate table text in the given format.
    pub fn parse(contents: &str, format: DataFormat) -> Result<Self, DataError> {
        let file: PropertyFile = match format {
            DataFormat::Toml => toml::from_str(contents).map_err(|e| DataError::Parse {
                path: Default::default(),
                message: e.to_string(),
            })?,
            DataFormat::Json => serde_json::from_str(contents).map_err(|e| DataError::Parse {
                path: Default::default(),
                message: e.to_string(),
            })?,
        };

        let descriptors = file
            .property
            .into_iter()
            .map(PropertyDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_descriptors(descriptors)
    }

    /// Build a table from descriptors, checking names, identifiers and alias targets.
    pub fn from_descriptors(entries: Vec<PropertyDescriptor>) -> Result<Self, DataError> {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name()) {
                return Err(DataError::DuplicateProperty(entry.name().to_string()));
            }
            if !is_identifier(entry.ident()) {
                return Err(DataError::InvalidIdentifier {
                    property: entry.name().to_string(),
                    identifier: entry.ident().to_string(),
                });
            }
        }

        for entry in &entries {
            if let Some(target) = entry.target() {
                if !names.contains(target) {
                    return Err(DataError::UnknownAliasTarget {
                        alias: entry.name().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifiers are pasted into C++ enumerator names.
fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

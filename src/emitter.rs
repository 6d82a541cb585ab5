//! Property ID emitter.
//!
//! Walks the property table in order, producing one enumerator name per
//! entry, checks that longhands, shorthands and aliases arrive in group
//! order, and fills the `property_ids`, `longhand_count` and
//! `shorthand_count` placeholders of the header template.
//!
//! The two "count" placeholders receive identifiers, not numbers: the first
//! enumerator after the longhands and the first after the shorthands. The
//! template uses them as group boundaries.

use crate::error::{
    GenerateError, MarkerError, OrderingError, OrderingViolation, ViolationKind,
};
use crate::property::{PropertyDescriptor, PropertyKind, PropertyTable};
use crate::template::Template;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Enumerator prefix for longhands and shorthands.
pub const PROPERTY_PREFIX: &str = "eCSSProperty_";

/// Enumerator prefix for aliases.
pub const ALIAS_PREFIX: &str = "eCSSPropertyAlias_";

/// Written ahead of every rendered template.
pub const HEADER: &str = "/* THIS IS AN AUTOGENERATED FILE.  DO NOT EDIT */\n\n";

/// Placeholder names filled by the emitter.
pub const PROPERTY_IDS_KEY: &str = "property_ids";
pub const LONGHAND_COUNT_KEY: &str = "longhand_count";
pub const SHORTHAND_COUNT_KEY: &str = "shorthand_count";

/// Enumerator name emitted for a descriptor.
pub fn property_id(descriptor: &PropertyDescriptor) -> String {
    match descriptor.kind() {
        PropertyKind::Alias => format!("{}{}", ALIAS_PREFIX, descriptor.ident()),
        PropertyKind::Longhand | PropertyKind::Shorthand => {
            format!("{}{}", PROPERTY_PREFIX, descriptor.ident())
        }
    }
}

/// Enumerator names in table order, with per-group counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyIdList {
    ids: Vec<String>,
    longhand_count: usize,
    shorthand_count: usize,
    alias_count: usize,
}

/// Boundary identifiers substituted for the two count placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// First enumerator after the longhands.
    pub longhand: String,
    /// First enumerator after the shorthands.
    pub shorthand: String,
}

impl PropertyIdList {
    /// Walk the table once, returning the id list and every ordering violation.
    ///
    /// A longhand is out of order once any shorthand was seen. A shorthand is
    /// out of order once any alias was seen. Aliases are never out of order.
    pub fn scan(table: &PropertyTable) -> (Self, Vec<OrderingViolation>) {
        let mut list = PropertyIdList::default();
        let mut violations = Vec::new();

        for (position, descriptor) in table.iter().enumerate() {
            match descriptor.kind() {
                PropertyKind::Alias => list.alias_count += 1,
                PropertyKind::Longhand => {
                    if list.shorthand_count != 0 {
                        violations.push(OrderingViolation {
                            position,
                            property: descriptor.name().to_string(),
                            kind: ViolationKind::LonghandAfterShorthand,
                        });
                    }
                    list.longhand_count += 1;
                }
                PropertyKind::Shorthand => {
                    // Checks aliases, not shorthands: a shorthand may not follow an alias.
                    if list.alias_count != 0 {
                        violations.push(OrderingViolation {
                            position,
                            property: descriptor.name().to_string(),
                            kind: ViolationKind::ShorthandAfterAlias,
                        });
                    }
                    list.shorthand_count += 1;
                }
            }
            list.ids.push(property_id(descriptor));
        }

        (list, violations)
    }

    /// Build the id list, failing if the table is out of group order.
    pub fn collect(table: &PropertyTable) -> Result<Self, OrderingError> {
        let (list, violations) = Self::scan(table);
        if violations.is_empty() {
            Ok(list)
        } else {
            Err(OrderingError(violations))
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn longhand_count(&self) -> usize {
        self.longhand_count
    }

    pub fn shorthand_count(&self) -> usize {
        self.shorthand_count
    }

    pub fn alias_count(&self) -> usize {
        self.alias_count
    }

    fn marker_at(&self, marker: &'static str, index: usize) -> Result<&str, MarkerError> {
        self.ids
            .get(index)
            .map(String::as_str)
            .ok_or(MarkerError {
                marker,
                index,
                len: self.ids.len(),
            })
    }

    /// Identifier at index `longhand_count`.
    pub fn longhand_marker(&self) -> Result<&str, MarkerError> {
        self.marker_at(LONGHAND_COUNT_KEY, self.longhand_count)
    }

    /// Identifier at index `longhand_count + shorthand_count`.
    pub fn shorthand_marker(&self) -> Result<&str, MarkerError> {
        self.marker_at(
            SHORTHAND_COUNT_KEY,
            self.longhand_count + self.shorthand_count,
        )
    }

    pub fn markers(&self) -> Result<Markers, MarkerError> {
        Ok(Markers {
            longhand: self.longhand_marker()?.to_string(),
            shorthand: self.shorthand_marker()?.to_string(),
        })
    }

    /// One `  <id>,` line per identifier.
    pub fn render_list(&self) -> String {
        self.ids
            .iter()
            .map(|id| format!("  {},", id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render the full output (header and substituted template) for a table.
pub fn render(template: &Template, table: &PropertyTable) -> Result<String, GenerateError> {
    let list = PropertyIdList::collect(table)?;
    let markers = list.markers()?;
    debug!(
        longhands = list.longhand_count(),
        shorthands = list.shorthand_count(),
        aliases = list.alias_count(),
        longhand_marker = %markers.longhand,
        shorthand_marker = %markers.shorthand,
        "Collected property ids"
    );

    let mut values = HashMap::new();
    values.insert(PROPERTY_IDS_KEY, list.render_list());
    values.insert(LONGHAND_COUNT_KEY, markers.longhand);
    values.insert(SHORTHAND_COUNT_KEY, markers.shorthand);
    let body = template.substitute(&values)?;

    let mut out = String::with_capacity(HEADER.len() + body.len());
    out.push_str(HEADER);
    out.push_str(&body);
    Ok(out)
}

/// Read a template file into a parsed template.
pub fn load_template(path: &Path) -> Result<Template, GenerateError> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerateError::TemplateIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Template::parse(&text))
}

/// Render the output for a template file and a data file, without writing it.
pub fn render_files(template_path: &Path, data_path: &Path) -> Result<String, GenerateError> {
    let template = load_template(template_path)?;
    let table = PropertyTable::load(data_path)?;
    render(&template, &table)
}

/// Render `template_path` with the table in `data_path` and write it to `sink`.
///
/// The sink is written once, after rendering succeeded; a failed run
/// writes nothing.
pub fn generate<W: Write>(
    sink: &mut W,
    template_path: &Path,
    data_path: &Path,
) -> Result<(), GenerateError> {
    let content = render_files(template_path, data_path)?;
    sink.write_all(content.as_bytes())
        .map_err(GenerateError::Sink)?;
    sink.flush().map_err(GenerateError::Sink)?;
    info!(
        template = %template_path.display(),
        data = %data_path.display(),
        bytes = content.len(),
        "Generated property ids"
    );
    Ok(())
}

/// Result of checking a table without rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub longhands: usize,
    pub shorthands: usize,
    pub aliases: usize,
    pub longhand_marker: Option<String>,
    pub shorthand_marker: Option<String>,
    pub violations: Vec<OrderingViolation>,
    pub marker_errors: Vec<MarkerError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty() && self.marker_errors.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.violations.len() + self.marker_errors.len()
    }
}

/// Check group order and marker availability, collecting every problem.
pub fn validate(table: &PropertyTable) -> ValidationReport {
    let (list, violations) = PropertyIdList::scan(table);
    let mut marker_errors = Vec::new();

    let longhand_marker = match list.longhand_marker() {
        Ok(id) => Some(id.to_string()),
        Err(e) => {
            marker_errors.push(e);
            None
        }
    };
    let shorthand_marker = match list.shorthand_marker() {
        Ok(id) => Some(id.to_string()),
        Err(e) => {
            marker_errors.push(e);
            None
        }
    };

    ValidationReport {
        total: list.len(),
        longhands: list.longhand_count(),
        shorthands: list.shorthand_count(),
        aliases: list.alias_count(),
        longhand_marker,
        shorthand_marker,
        violations,
        marker_errors,
    }
}

//! Inspect presentation: one row per property with its emitted identifier.

use super::shared::{format_section_heading, marker_or_dash, to_pretty_json};
use crate::emitter::PropertyIdList;
use crate::error::{GenerateError, OrderingViolation};
use crate::property::PropertyTable;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

fn violation_at(violations: &[OrderingViolation], position: usize) -> Option<&OrderingViolation> {
    violations.iter().find(|v| v.position == position)
}

pub fn format_inspect_text(
    table: &PropertyTable,
    list: &PropertyIdList,
    violations: &[OrderingViolation],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Properties")));

    let mut rows = Table::new();
    rows.load_preset(UTF8_BORDERS_ONLY);
    rows.set_header(vec!["#", "Name", "Type", "Identifier", "Order"]);
    for (position, (descriptor, id)) in table.iter().zip(list.ids()).enumerate() {
        let order = violation_at(violations, position)
            .map(|v| v.kind.to_string())
            .unwrap_or_else(|| "ok".to_string());
        rows.add_row(vec![
            position.to_string(),
            descriptor.name().to_string(),
            descriptor.kind().to_string(),
            id.clone(),
            order,
        ]);
    }
    out.push_str(&format!("{}\n\n", rows));

    out.push_str(&format!(
        "Longhands: {}  Shorthands: {}  Aliases: {}\n",
        list.longhand_count(),
        list.shorthand_count(),
        list.alias_count()
    ));
    out.push_str(&format!(
        "First after longhands: {}\nFirst after shorthands: {}",
        marker_or_dash(list.longhand_marker().ok()),
        marker_or_dash(list.shorthand_marker().ok())
    ));
    out
}

pub fn format_inspect_json(
    table: &PropertyTable,
    list: &PropertyIdList,
    violations: &[OrderingViolation],
) -> Result<String, GenerateError> {
    let properties: Vec<serde_json::Value> = table
        .iter()
        .zip(list.ids())
        .enumerate()
        .map(|(position, (descriptor, id))| {
            json!({
                "position": position,
                "name": descriptor.name(),
                "type": descriptor.kind().as_str(),
                "identifier": id,
                "target": descriptor.target(),
                "violation": violation_at(violations, position).map(|v| v.kind.to_string()),
            })
        })
        .collect();

    to_pretty_json(&json!({
        "properties": properties,
        "longhand_count": list.longhand_count(),
        "shorthand_count": list.shorthand_count(),
        "alias_count": list.alias_count(),
        "longhand_marker": list.longhand_marker().ok(),
        "shorthand_marker": list.shorthand_marker().ok(),
    }))
}

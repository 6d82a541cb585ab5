//! Validate presentation: ordering and marker report.

use super::shared::{format_section_heading, marker_or_dash, to_pretty_json};
use crate::emitter::ValidationReport;
use crate::error::GenerateError;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_validation_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_section_heading("Property table")));
    out.push_str(&format!("  Properties: {}\n", report.total));
    out.push_str(&format!("  Longhands: {}\n", report.longhands));
    out.push_str(&format!("  Shorthands: {}\n", report.shorthands));
    out.push_str(&format!("  Aliases: {}\n", report.aliases));
    out.push_str(&format!(
        "  First after longhands: {}\n",
        marker_or_dash(report.longhand_marker.as_deref())
    ));
    out.push_str(&format!(
        "  First after shorthands: {}\n",
        marker_or_dash(report.shorthand_marker.as_deref())
    ));

    if report.is_valid() {
        out.push_str(&format!("\n{}", "Validation passed".green()));
        return out;
    }

    out.push_str(&format!(
        "\n{} ({} problem(s))",
        "Validation failed".red(),
        report.problem_count()
    ));
    for v in &report.violations {
        out.push_str(&format!("\n  - {}", v));
    }
    for e in &report.marker_errors {
        out.push_str(&format!("\n  - {}", e));
    }
    out
}

pub fn format_validation_json(report: &ValidationReport) -> Result<String, GenerateError> {
    let violations: Vec<serde_json::Value> = report
        .violations
        .iter()
        .map(|v| {
            json!({
                "position": v.position,
                "property": v.property,
                "problem": v.kind.to_string(),
            })
        })
        .collect();
    let marker_errors: Vec<serde_json::Value> = report
        .marker_errors
        .iter()
        .map(|e| json!({ "marker": e.marker, "index": e.index, "len": e.len }))
        .collect();

    to_pretty_json(&json!({
        "valid": report.is_valid(),
        "total": report.total,
        "longhands": report.longhands,
        "shorthands": report.shorthands,
        "aliases": report.aliases,
        "longhand_marker": report.longhand_marker,
        "shorthand_marker": report.shorthand_marker,
        "violations": violations,
        "marker_errors": marker_errors,
    }))
}

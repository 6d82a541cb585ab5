//! Shared presentation helpers.

use crate::error::GenerateError;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Abbreviated digest for human-readable output.
pub fn short_digest(digest: &str) -> &str {
    &digest[..digest.len().min(12)]
}

pub fn to_pretty_json(value: &serde_json::Value) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn marker_or_dash(marker: Option<&str>) -> String {
    marker.map(str::to_string).unwrap_or_else(|| "-".to_string())
}

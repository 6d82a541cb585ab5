//! `$`-delimited text templates.
//!
//! Recognizes `$$` (a literal `$`), `$name` and `${name}`, where a name is an
//! ASCII identifier. Any other `$` is an invalid placeholder: `substitute`
//! rejects it, `safe_substitute` copies it through unchanged.

use crate::error::TemplateError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const IDENT: &str = "[_a-zA-Z][_a-zA-Z0-9]*";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"\$(?:(?P<escaped>\$)|(?P<named>{id})|\{{(?P<braced>{id})\}}|(?P<invalid>))",
            id = IDENT
        );
        Regex::new(&pattern).expect("placeholder pattern is a valid regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Escaped,
    Placeholder { name: String, braced: bool },
    Invalid { line: usize, col: usize },
}

/// A parsed template, ready for repeated substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. Parsing never fails; invalid placeholders are
    /// reported at substitution time.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in placeholder_pattern().captures_iter(text) {
            let whole = caps.get(0).expect("capture group 0 always matches");
            if whole.start() > last {
                segments.push(Segment::Literal(text[last..whole.start()].to_string()));
            }
            last = whole.end();

            if caps.name("escaped").is_some() {
                segments.push(Segment::Escaped);
            } else if let Some(name) = caps.name("named") {
                segments.push(Segment::Placeholder {
                    name: name.as_str().to_string(),
                    braced: false,
                });
            } else if let Some(name) = caps.name("braced") {
                segments.push(Segment::Placeholder {
                    name: name.as_str().to_string(),
                    braced: true,
                });
            } else {
                let (line, col) = line_col(text, whole.start());
                segments.push(Segment::Invalid { line, col });
            }
        }

        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }

        Self { segments }
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder { name, .. } = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder, failing on the first invalid `$` or
    /// the first name with no value.
    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Escaped => out.push('$'),
                Segment::Placeholder { name, .. } => {
                    let value = values
                        .get(name.as_str())
                        .ok_or_else(|| TemplateError::MissingKey(name.clone()))?;
                    out.push_str(value);
                }
                Segment::Invalid { line, col } => {
                    return Err(TemplateError::InvalidPlaceholder {
                        line: *line,
                        col: *col,
                    });
                }
            }
        }
        Ok(out)
    }

    /// Substitute known placeholders; unknown and invalid ones are kept as written.
    pub fn safe_substitute(&self, values: &HashMap<&str, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Escaped => out.push('$'),
                Segment::Placeholder { name, braced } => match values.get(name.as_str()) {
                    Some(value) => out.push_str(value),
                    None if *braced => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                    None => {
                        out.push('$');
                        out.push_str(name);
                    }
                },
                Segment::Invalid { .. } => out.push('$'),
            }
        }
        out
    }
}

/// 1-based line and column (in chars) of a byte offset.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

//! CLI presentation: text and json formatters per command family.

mod generate;
mod inspect;
mod shared;
mod validate;

pub use generate::format_generate_outcome;
pub use inspect::{format_inspect_json, format_inspect_text};
pub use validate::{format_validation_json, format_validation_text};

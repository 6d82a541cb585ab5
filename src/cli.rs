//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the emitter.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_generate_outcome, format_inspect_json, format_inspect_text, format_validation_json,
    format_validation_text,
};
pub use route::{CommandOutput, RunContext};

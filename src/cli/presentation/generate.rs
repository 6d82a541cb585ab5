//! Generate presentation: write outcome summary.

use super::shared::short_digest;
use crate::output::{WriteOutcome, WriteStatus};

pub fn format_generate_outcome(outcome: &WriteOutcome) -> String {
    let verb = match outcome.status {
        WriteStatus::Written => "Wrote",
        WriteStatus::Unchanged => "Unchanged",
        WriteStatus::UpToDate => "Up to date",
    };
    format!(
        "{}: {} ({} bytes, blake3 {})",
        verb,
        outcome.target,
        outcome.bytes,
        short_digest(&outcome.digest)
    )
}

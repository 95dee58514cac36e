//! Parsing of newline-separated `"<x>, <y>"` target lists.

use crate::{Coord, RegionError};

/// Parse one target per non-blank line.
///
/// The first malformed line aborts with its 1-based line number; nothing is skipped.
pub fn parse_targets(input: &str) -> Result<Vec<Coord>, RegionError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Coord>().map_err(|e| match e {
                RegionError::Parse { record, reason, .. } => RegionError::Parse {
                    line: i + 1,
                    record,
                    reason,
                },
                other => other,
            })
        })
        .collect()
}

//! Error types for region partitioning.

use std::fmt;

use crate::{BoundingBox, Coord};

/// Errors that can occur while building or querying a partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// No targets were supplied, so no bounding box exists.
    EmptyTargets,

    /// The bounding box has more cells than can be indexed.
    TooLarge { min: Coord, max: Coord },

    /// A coordinate-indexed query fell outside the bounding box.
    OutOfRange { x: i64, y: i64, bounds: BoundingBox },

    /// A coordinate record was malformed.
    /// `line` is 1-based, or 0 when the record was parsed on its own.
    Parse {
        line: usize,
        record: String,
        reason: String,
    },

    /// A region query was made before `fill()`.
    NotFilled,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::EmptyTargets => {
                write!(f, "empty target set: need at least 1 target")
            }
            RegionError::TooLarge { min, max } => {
                write!(
                    f,
                    "bounding box ({}, {})..=({}, {}) has too many cells to index",
                    min.x, min.y, max.x, max.y
                )
            }
            RegionError::OutOfRange { x, y, bounds } => {
                write!(
                    f,
                    "coordinate ({}, {}) out of bounding box ({}, {})..=({}, {})",
                    x, y, bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
                )
            }
            RegionError::Parse {
                line,
                record,
                reason,
            } => {
                if *line == 0 {
                    write!(f, "malformed record {:?}: {}", record, reason)
                } else {
                    write!(f, "line {}: malformed record {:?}: {}", line, record, reason)
                }
            }
            RegionError::NotFilled => {
                write!(f, "grid not filled: call fill() before region queries")
            }
        }
    }
}

impl std::error::Error for RegionError {}

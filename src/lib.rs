//! Nearest-target partitioning of bounded integer grids (Manhattan distance).
//!
//! Every coordinate in the bounding box of a target set is assigned to its
//! unique nearest target, or marked as a tie. From that grid the crate answers
//! two queries: the largest finite region, and how many coordinates have a
//! total distance to all targets below a threshold.
//!
//! # Example
//!
//! ```
//! use manhattan_regions::{partition, Coord, Nearest};
//!
//! let targets: [(i64, i64); 6] = [(1, 1), (1, 6), (8, 3), (3, 4), (5, 5), (8, 9)];
//! let partitioner = partition(&targets).expect("non-empty target set");
//!
//! assert_eq!(partitioner.nearest_target(Coord::new(4, 2)), Ok(Nearest::Unique(3)));
//! assert_eq!(partitioner.nearest_target(Coord::new(5, 1)), Ok(Nearest::Tie));
//! assert_eq!(partitioner.largest_finite_region(), Ok(17));
//! assert_eq!(partitioner.count_under_threshold(32), 16);
//! ```

mod bounds;
mod error;
mod grid;
mod parse;
mod partitioner;
mod types;
pub mod validation;

// Internal modules
pub(crate) mod timing;

pub use bounds::BoundingBox;
pub use error::RegionError;
pub use grid::{Grid, Nearest};
pub use parse::parse_targets;
pub use partitioner::RegionPartitioner;
pub use types::{Coord, CoordLike, Target};

/// Configuration for region queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionConfig {
    /// If true, stop summing a cell's distances once the running total reaches
    /// the threshold in [`RegionPartitioner::count_under_threshold`].
    ///
    /// Distances are non-negative, so results are identical either way. Turning
    /// this off is only useful for timing the full evaluation.
    pub early_exit: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Build a partitioner with default settings and fill its grid.
///
/// Errors are reserved for invalid inputs (an empty target set).
pub fn partition<P: CoordLike>(points: &[P]) -> Result<RegionPartitioner, RegionError> {
    partition_with(points, PartitionConfig::default())
}

/// Build a partitioner with explicit configuration and fill its grid.
pub fn partition_with<P: CoordLike>(
    points: &[P],
    config: PartitionConfig,
) -> Result<RegionPartitioner, RegionError> {
    let mut partitioner = RegionPartitioner::with_config(points, config)?;
    partitioner.fill();
    Ok(partitioner)
}

//! Nearest-target partitioning of the bounding box.

use std::fmt;

use rustc_hash::FxHashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::timing::{Phase, PhaseTimings, Timer};
use crate::{BoundingBox, Coord, CoordLike, Grid, Nearest, PartitionConfig, RegionError, Target};

/// Conditionally parallel iterator over a range.
macro_rules! maybe_par_range {
    ($range:expr) => {{
        #[cfg(feature = "parallel")]
        {
            ($range).into_par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $range
        }
    }};
}

/// Owns the targets, their bounding box and the nearest-target grid.
///
/// Starts unfilled. [`fill`](Self::fill) assigns every cell once; region
/// queries are only available afterwards.
#[derive(Debug, Clone)]
pub struct RegionPartitioner {
    targets: Vec<Target>,
    bounds: BoundingBox,
    boundary: FxHashSet<usize>,
    grid: Grid,
    filled: bool,
    config: PartitionConfig,
}

impl RegionPartitioner {
    /// Build an unfilled partitioner with default settings.
    pub fn new<P: CoordLike>(points: &[P]) -> Result<Self, RegionError> {
        Self::with_config(points, PartitionConfig::default())
    }

    /// Build an unfilled partitioner with explicit configuration.
    pub fn with_config<P: CoordLike>(
        points: &[P],
        config: PartitionConfig,
    ) -> Result<Self, RegionError> {
        let coords: Vec<Coord> = points.iter().map(Coord::from_like).collect();
        let bounds = BoundingBox::from_coords(&coords)?;

        let targets: Vec<Target> = coords
            .into_iter()
            .enumerate()
            .map(|(id, coord)| Target { id, coord })
            .collect();
        let boundary = targets
            .iter()
            .filter(|t| bounds.on_edge(t.coord))
            .map(|t| t.id)
            .collect();

        Ok(Self {
            targets,
            bounds,
            boundary,
            grid: Grid::unassigned(bounds),
            filled: false,
            config,
        })
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn target(&self, id: usize) -> Option<Target> {
        self.targets.get(id).copied()
    }

    #[inline]
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    #[inline]
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Ids of targets on an edge of the bounding box, ascending.
    ///
    /// Their regions extend past the box, so they never count as finite.
    pub fn boundary_targets(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.boundary.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[inline]
    pub fn is_boundary(&self, id: usize) -> bool {
        self.boundary.contains(&id)
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Manhattan distance from `c` to every target, in id order.
    pub fn distances(&self, c: Coord) -> Vec<i64> {
        self.targets.iter().map(|t| t.coord.manhattan(c)).collect()
    }

    /// Nearest target of an in-box coordinate, computed directly.
    pub fn nearest_target(&self, c: Coord) -> Result<Nearest, RegionError> {
        self.bounds.index_of(c)?;
        Ok(nearest_of(&self.targets, c))
    }

    /// Stored grid cell. `Ok(None)` before the fill.
    pub fn cell(&self, c: Coord) -> Result<Option<Nearest>, RegionError> {
        self.grid.get(c)
    }

    /// Assign every cell its nearest target. Calling again recomputes the same grid.
    pub fn fill(&mut self) {
        let timer = Timer::start();
        let bounds = self.bounds;
        let targets = &self.targets;

        let cells: Vec<Option<Nearest>> = maybe_par_range!(0..bounds.num_cells())
            .map(|i| Some(nearest_of(targets, bounds.coord_at(i))))
            .collect();

        self.grid.set_cells(cells);
        self.filled = true;

        PhaseTimings::new(Phase::Fill, timer.elapsed(), bounds.num_cells(), targets.len()).report();
    }

    /// Cells uniquely owned by each target, indexed by id. Boundary targets included.
    pub fn region_sizes(&self) -> Result<Vec<usize>, RegionError> {
        if !self.filled {
            return Err(RegionError::NotFilled);
        }
        let mut sizes = vec![0usize; self.targets.len()];
        for id in self.grid.cells().iter().filter_map(|c| c.and_then(Nearest::id)) {
            sizes[id] += 1;
        }
        Ok(sizes)
    }

    /// Largest region owned by a non-boundary target, or 0 if none owns a cell.
    pub fn largest_finite_region(&self) -> Result<usize, RegionError> {
        let sizes = self.region_sizes()?;
        Ok(sizes
            .into_iter()
            .enumerate()
            .filter(|(id, _)| !self.is_boundary(*id))
            .map(|(_, size)| size)
            .max()
            .unwrap_or(0))
    }

    /// Number of in-box coordinates whose summed distance to all targets is `< threshold`.
    pub fn count_under_threshold(&self, threshold: i64) -> usize {
        let timer = Timer::start();
        let bounds = self.bounds;
        let targets = &self.targets;
        let early_exit = self.config.early_exit;

        let count = maybe_par_range!(0..bounds.num_cells())
            .filter(|&i| {
                let c = bounds.coord_at(i);
                if early_exit {
                    total_distance_below(targets, c, threshold)
                } else {
                    total_distance(targets, c) < threshold
                }
            })
            .count();

        PhaseTimings::new(
            Phase::ThresholdCount,
            timer.elapsed(),
            bounds.num_cells(),
            targets.len(),
        )
        .report();
        count
    }
}

impl fmt::Display for RegionPartitioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Single pass over the targets tracking the best distance and whether it is shared.
fn nearest_of(targets: &[Target], c: Coord) -> Nearest {
    let mut best = i64::MAX;
    let mut best_id = 0usize;
    let mut tied = false;
    for t in targets {
        let d = t.coord.manhattan(c);
        if d < best {
            best = d;
            best_id = t.id;
            tied = false;
        } else if d == best {
            tied = true;
        }
    }
    if tied {
        Nearest::Tie
    } else {
        Nearest::Unique(best_id)
    }
}

/// Summed distance to every target, saturating at `i64::MAX`.
///
/// Any threshold is at most `i64::MAX`, so a saturated sum still compares
/// correctly under `< threshold`.
fn total_distance(targets: &[Target], c: Coord) -> i64 {
    targets
        .iter()
        .fold(0i64, |sum, t| sum.saturating_add(t.coord.manhattan(c)))
}

/// Distances are non-negative, so the running sum can stop once it reaches `threshold`.
fn total_distance_below(targets: &[Target], c: Coord, threshold: i64) -> bool {
    let mut sum = 0i64;
    for t in targets {
        sum = sum.saturating_add(t.coord.manhattan(c));
        if sum >= threshold {
            return false;
        }
    }
    sum < threshold
}

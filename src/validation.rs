//! Structural validation for filled partitioners.
//!
//! Checks that every cell carries a valid assignment and that each target
//! owns (or ties for) its own cell. Useful for testing and for catching
//! misuse such as querying before `fill()`.

use crate::{Nearest, RegionPartitioner};

/// Validation report for a partitioner's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether `fill()` has run.
    pub filled: bool,
    /// Cells in the bounding box.
    pub num_cells: usize,
    /// Cells holding a unique id or a tie.
    pub assigned_cells: usize,
    /// Cells still unassigned.
    pub unassigned_cells: usize,
    /// Cells equidistant from two or more targets.
    pub tie_cells: usize,
    /// Cells naming an id that is not a target.
    pub invalid_ids: usize,
    /// Targets whose own cell is owned by a different target.
    pub misplaced_targets: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.filled
            && self.unassigned_cells == 0
            && self.invalid_ids == 0
            && self.misplaced_targets == 0
    }
}

/// Validate the grid of `partitioner`.
pub fn validate(partitioner: &RegionPartitioner) -> ValidationReport {
    let n = partitioner.num_targets();
    let num_cells = partitioner.grid().len();

    let mut assigned_cells = 0;
    let mut tie_cells = 0;
    let mut invalid_ids = 0;
    for cell in partitioner.grid().cells().iter().flatten() {
        assigned_cells += 1;
        match cell {
            Nearest::Tie => tie_cells += 1,
            Nearest::Unique(id) if *id >= n => invalid_ids += 1,
            Nearest::Unique(_) => {}
        }
    }

    // A target is at distance 0 from itself: it can only tie, never lose.
    let misplaced_targets = partitioner
        .targets()
        .iter()
        .filter(|t| match partitioner.cell(t.coord) {
            Ok(Some(Nearest::Unique(id))) => id != t.id,
            Ok(Some(Nearest::Tie)) | Ok(None) => false,
            Err(_) => true,
        })
        .count();

    ValidationReport {
        filled: partitioner.is_filled(),
        num_cells,
        assigned_cells,
        unassigned_cells: num_cells - assigned_cells,
        tie_cells,
        invalid_ids,
        misplaced_targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_unfilled_is_invalid() {
        let p = RegionPartitioner::new(&[[0i64, 0], [3, 2]]).unwrap();
        let report = validate(&p);
        assert!(!report.is_valid());
        assert_eq!(report.num_cells, 12);
        assert_eq!(report.unassigned_cells, 12);
        assert_eq!(report.assigned_cells, 0);
    }

    #[test]
    fn test_filled_is_valid() {
        let mut p = RegionPartitioner::new(&[
            Coord::new(1, 1),
            Coord::new(1, 6),
            Coord::new(8, 3),
            Coord::new(3, 4),
            Coord::new(5, 5),
            Coord::new(8, 9),
        ])
        .unwrap();
        p.fill();
        let report = validate(&p);
        assert!(report.is_valid(), "{:?}", report);
        assert_eq!(report.assigned_cells, 72);
        assert!(report.tie_cells > 0);
    }
}

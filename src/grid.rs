//! Dense nearest-target grid storage.

use std::fmt;

use crate::{BoundingBox, Coord, RegionError};

/// Result of a nearest-target query for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nearest {
    /// Exactly one target achieves the minimum distance.
    Unique(usize),
    /// Two or more targets share the minimum distance.
    Tie,
}

impl Nearest {
    /// The owning target id, if unique.
    #[inline]
    pub fn id(self) -> Option<usize> {
        match self {
            Nearest::Unique(id) => Some(id),
            Nearest::Tie => None,
        }
    }

    #[inline]
    pub fn is_tie(self) -> bool {
        matches!(self, Nearest::Tie)
    }
}

/// Row-major cell storage over a bounding box. `None` marks an unassigned cell.
///
/// The cell buffer stays empty until the first fill, so an unfilled grid
/// costs nothing regardless of the box size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundingBox,
    cells: Vec<Option<Nearest>>,
}

impl Grid {
    /// All cells unassigned. Allocates nothing.
    pub(crate) fn unassigned(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            cells: Vec::new(),
        }
    }

    /// Replace the whole cell buffer. `cells.len()` must match the box.
    pub(crate) fn set_cells(&mut self, cells: Vec<Option<Nearest>>) {
        debug_assert_eq!(cells.len(), self.bounds.num_cells());
        self.cells = cells;
    }

    #[inline]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Number of cells in the box, assigned or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.num_cells()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at a global coordinate.
    pub fn get(&self, c: Coord) -> Result<Option<Nearest>, RegionError> {
        let idx = self.bounds.index_of(c)?;
        Ok(self.at(idx))
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Nearest> {
        self.cells.get(index).copied().flatten()
    }

    /// Flat row-major view of the stored cells. Empty before the first fill.
    #[inline]
    pub fn cells(&self) -> &[Option<Nearest>] {
        &self.cells
    }

    /// Iterate `(coord, cell)` pairs over the whole box in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Nearest>)> + '_ {
        (0..self.len()).map(move |i| (self.bounds.coord_at(i), self.at(i)))
    }

    /// True when no cell is unassigned.
    pub fn is_filled(&self) -> bool {
        self.cells.len() == self.len() && self.cells.iter().all(Option::is_some)
    }
}

/// Tab-separated table: x header, then one row per y.
/// Cells show their id, `.` for a tie and a space when unassigned.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bounds;
        for x in b.min.x..=b.max.x {
            write!(f, "\t{}", x)?;
        }
        writeln!(f)?;

        let w = b.width();
        for row in 0..b.height() {
            write!(f, "{}", b.min.y + row as i64)?;
            for i in row * w..(row + 1) * w {
                match self.at(i) {
                    Some(Nearest::Unique(id)) => write!(f, "\t{}", id)?,
                    Some(Nearest::Tie) => write!(f, "\t.")?,
                    None => write!(f, "\t ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

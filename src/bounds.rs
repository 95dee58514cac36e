//! Axis-aligned bounding box over the target set.

use glam::I64Vec2;

use crate::{Coord, RegionError};

/// Minimal inclusive rectangle covering every target.
///
/// Extents are checked once at construction, so `width() * height()` always
/// fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
    width: usize,
    height: usize,
}

impl BoundingBox {
    /// Compute the box covering `coords`.
    ///
    /// Errors on an empty slice, or when the cell count does not fit in a `usize`.
    pub fn from_coords(coords: &[Coord]) -> Result<Self, RegionError> {
        let (first, rest) = coords.split_first().ok_or(RegionError::EmptyTargets)?;
        let (lo, hi) = rest.iter().fold(
            (first.to_glam(), first.to_glam()),
            |(lo, hi): (I64Vec2, I64Vec2), c| (lo.min(c.to_glam()), hi.max(c.to_glam())),
        );
        let min = Coord::from_glam(lo);
        let max = Coord::from_glam(hi);

        let too_large = || RegionError::TooLarge { min, max };
        let width = extent(min.x, max.x).ok_or_else(too_large)?;
        let height = extent(min.y, max.y).ok_or_else(too_large)?;
        width.checked_mul(height).ok_or_else(too_large)?;

        Ok(Self {
            min,
            max,
            width,
            height,
        })
    }

    /// Number of columns (inclusive extent along x).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (inclusive extent along y).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&c.x) && (self.min.y..=self.max.y).contains(&c.y)
    }

    /// True if `c` lies on one of the four edges.
    #[inline]
    pub fn on_edge(&self, c: Coord) -> bool {
        c.x == self.min.x || c.x == self.max.x || c.y == self.min.y || c.y == self.max.y
    }

    /// Flat row-major index of `c` in the local frame.
    pub fn index_of(&self, c: Coord) -> Result<usize, RegionError> {
        if !self.contains(c) {
            return Err(RegionError::OutOfRange {
                x: c.x,
                y: c.y,
                bounds: *self,
            });
        }
        let lx = (c.x - self.min.x) as usize;
        let ly = (c.y - self.min.y) as usize;
        Ok(ly * self.width() + lx)
    }

    /// Inverse of [`index_of`](Self::index_of). `index` must be `< num_cells()`.
    #[inline]
    pub fn coord_at(&self, index: usize) -> Coord {
        let w = self.width();
        debug_assert!(index < self.num_cells());
        Coord::new(
            self.min.x + (index % w) as i64,
            self.min.y + (index / w) as i64,
        )
    }

    /// Iterate all coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.num_cells()).map(move |i| self.coord_at(i))
    }
}

/// Inclusive length of `lo..=hi`, if it is representable as both `i64` and `usize`.
fn extent(lo: i64, hi: i64) -> Option<usize> {
    let span = hi.checked_sub(lo)?.checked_add(1)?;
    usize::try_from(span).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> BoundingBox {
        BoundingBox::from_coords(&[Coord::new(1, 1), Coord::new(8, 3), Coord::new(3, 9)]).unwrap()
    }

    #[test]
    fn test_from_coords() {
        let b = sample_box();
        assert_eq!(b.min, Coord::new(1, 1));
        assert_eq!(b.max, Coord::new(8, 9));
        assert_eq!(b.width(), 8);
        assert_eq!(b.height(), 9);
        assert_eq!(b.num_cells(), 72);
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(BoundingBox::from_coords(&[]), Err(RegionError::EmptyTargets));
    }

    #[test]
    fn test_single_point_box() {
        let b = BoundingBox::from_coords(&[Coord::new(-5, 7)]).unwrap();
        assert_eq!(b.num_cells(), 1);
        assert_eq!(b.index_of(Coord::new(-5, 7)), Ok(0));
        assert!(b.on_edge(Coord::new(-5, 7)));
    }

    #[test]
    fn test_index_roundtrip_covers_box() {
        let b = sample_box();
        for (i, c) in b.iter_coords().enumerate() {
            assert_eq!(b.index_of(c), Ok(i));
        }
        assert_eq!(b.iter_coords().count(), b.num_cells());
    }

    #[test]
    fn test_extreme_range_is_too_large() {
        let coords = [Coord::new(i64::MIN, 0), Coord::new(i64::MAX, 0)];
        assert!(matches!(
            BoundingBox::from_coords(&coords),
            Err(RegionError::TooLarge { .. })
        ));

        let coords = [Coord::new(0, -1), Coord::new(0, i64::MAX)];
        assert!(matches!(
            BoundingBox::from_coords(&coords),
            Err(RegionError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_wide_box_is_too_large() {
        let coords = [Coord::new(0, 0), Coord::new(1 << 32, 1 << 32)];
        assert!(matches!(
            BoundingBox::from_coords(&coords),
            Err(RegionError::TooLarge { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_largest_single_row() {
        // Width i64::MAX still fits in a usize on 64-bit targets.
        let half = i64::MAX / 2;
        let b = BoundingBox::from_coords(&[Coord::new(-half, 0), Coord::new(half, 0)]).unwrap();
        assert_eq!(b.width() as u64, i64::MAX as u64);
        assert_eq!(b.height(), 1);
        assert_eq!(b.num_cells(), b.width());
    }

    #[test]
    fn test_index_out_of_range() {
        let b = sample_box();
        for c in [
            Coord::new(0, 5),
            Coord::new(9, 5),
            Coord::new(4, 0),
            Coord::new(4, 10),
        ] {
            assert!(matches!(
                b.index_of(c),
                Err(RegionError::OutOfRange { .. })
            ));
        }
    }
}

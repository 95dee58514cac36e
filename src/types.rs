//! Core types for Manhattan region partitioning.

use std::str::FromStr;

use glam::I64Vec2;

use crate::RegionError;

/// An integer point in the plane.
///
/// Small value type; converts to and from [`glam::I64Vec2`] for vector math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `CoordLike`.
    #[inline]
    pub fn from_like<P: CoordLike>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    #[inline]
    pub fn to_glam(self) -> I64Vec2 {
        I64Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_glam(v: I64Vec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Manhattan distance `|dx| + |dy|`, saturating at `i64::MAX`.
    ///
    /// Exact for any two points inside a [`BoundingBox`](crate::BoundingBox).
    #[inline]
    pub fn manhattan(self, other: Self) -> i64 {
        let d = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i64::try_from(d).unwrap_or(i64::MAX)
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Coord {
    #[inline]
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i64, i64) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl From<I64Vec2> for Coord {
    #[inline]
    fn from(v: I64Vec2) -> Self {
        Self::from_glam(v)
    }
}

/// Parses a single `"<x>, <y>"` record.
///
/// The separator must be exactly a comma followed by one space. Leading and
/// trailing whitespace around the whole record is ignored.
impl FromStr for Coord {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = s.trim();
        let fail = |reason: &str| RegionError::Parse {
            line: 0,
            record: record.to_string(),
            reason: reason.to_string(),
        };

        let (xs, ys) = record
            .split_once(", ")
            .ok_or_else(|| fail("expected \"<x>, <y>\""))?;
        let x = xs
            .parse::<i64>()
            .map_err(|e| fail(&format!("bad x field: {}", e)))?;
        let y = ys
            .parse::<i64>()
            .map_err(|e| fail(&format!("bad y field: {}", e)))?;
        Ok(Self::new(x, y))
    }
}

/// Trait for types that can be used as input points.
pub trait CoordLike {
    fn x(&self) -> i64;
    fn y(&self) -> i64;
}

impl CoordLike for Coord {
    #[inline]
    fn x(&self) -> i64 {
        self.x
    }
    #[inline]
    fn y(&self) -> i64 {
        self.y
    }
}

impl CoordLike for (i64, i64) {
    #[inline]
    fn x(&self) -> i64 {
        self.0
    }
    #[inline]
    fn y(&self) -> i64 {
        self.1
    }
}

impl CoordLike for [i64; 2] {
    #[inline]
    fn x(&self) -> i64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> i64 {
        self[1]
    }
}

impl CoordLike for I64Vec2 {
    #[inline]
    fn x(&self) -> i64 {
        self.x
    }
    #[inline]
    fn y(&self) -> i64 {
        self.y
    }
}

/// A labeled point that grid cells compete to be nearest to.
///
/// `id` is the ordinal position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub id: usize,
    pub coord: Coord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Coord::new(1, 1);
        assert_eq!(a.manhattan(a), 0);
        assert_eq!(a.manhattan(Coord::new(8, 9)), 15);
        assert_eq!(Coord::new(-3, 4).manhattan(Coord::new(2, -1)), 10);
    }

    #[test]
    fn test_manhattan_saturates() {
        let lo = Coord::new(i64::MIN, i64::MIN);
        let hi = Coord::new(i64::MAX, i64::MAX);
        assert_eq!(lo.manhattan(hi), i64::MAX);
        assert_eq!(Coord::new(i64::MIN, 0).manhattan(Coord::new(0, 0)), i64::MAX);
        assert_eq!(
            Coord::new(i64::MAX - 1, 0).manhattan(Coord::new(-1, 0)),
            i64::MAX
        );
    }

    #[test]
    fn test_coord_like_trait() {
        fn accepts_like<P: CoordLike>(p: &P) -> i64 {
            p.x() * 10 + p.y()
        }

        assert_eq!(accepts_like(&Coord::new(1, 2)), 12);
        assert_eq!(accepts_like(&(1i64, 2i64)), 12);
        assert_eq!(accepts_like(&[1i64, 2]), 12);
        assert_eq!(accepts_like(&I64Vec2::new(1, 2)), 12);
    }

    #[test]
    fn test_parse_record() {
        assert_eq!("1, 6".parse::<Coord>().unwrap(), Coord::new(1, 6));
        assert_eq!("  -4, 12\n".parse::<Coord>().unwrap(), Coord::new(-4, 12));
        assert_eq!("007, 3".parse::<Coord>().unwrap(), Coord::new(7, 3));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1 6", "1,6", "1,  6", "a, 6", "1, b", "1, 6, 7", "1.5, 2"] {
            let err = bad.parse::<Coord>().unwrap_err();
            assert!(
                matches!(err, RegionError::Parse { .. }),
                "expected parse error for {:?}, got {:?}",
                bad,
                err
            );
        }
    }
}

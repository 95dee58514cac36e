#![allow(dead_code)]

use manhattan_regions::Coord;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The six-target example used throughout the tests.
pub const CANONICAL: [(i64, i64); 6] = [(1, 1), (1, 6), (8, 3), (3, 4), (5, 5), (8, 9)];

pub fn canonical_coords() -> Vec<Coord> {
    CANONICAL.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

/// Uniform random targets in `[lo, hi)` on both axes.
pub fn random_targets(n: usize, lo: i64, hi: i64, seed: u64) -> Vec<Coord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_targets_with_rng(n, lo, hi, &mut rng)
}

pub fn random_targets_with_rng<R: Rng + ?Sized>(
    n: usize,
    lo: i64,
    hi: i64,
    rng: &mut R,
) -> Vec<Coord> {
    (0..n)
        .map(|_| Coord::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect()
}

/// Brute-force nearest target, independent of the library.
pub fn brute_nearest(targets: &[Coord], c: Coord) -> Option<usize> {
    let dists: Vec<i64> = targets.iter().map(|t| (t.x - c.x).abs() + (t.y - c.y).abs()).collect();
    let min = *dists.iter().min()?;
    let mut winners = dists.iter().enumerate().filter(|(_, &d)| d == min);
    let (first, _) = winners.next()?;
    if winners.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// Brute-force total distance from `c` to every target.
pub fn brute_total(targets: &[Coord], c: Coord) -> i64 {
    targets.iter().map(|t| (t.x - c.x).abs() + (t.y - c.y).abs()).sum()
}

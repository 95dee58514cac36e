use super::Phase;
use std::time::Duration;

/// Timer that tracks elapsed time when timing is enabled.
pub struct Timer(std::time::Instant);

impl Timer {
    #[inline]
    pub fn start() -> Self {
        Self(std::time::Instant::now())
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Wall time of one pass plus the problem size it covered.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings {
    phase: Phase,
    elapsed: Duration,
    cells: usize,
    targets: usize,
}

impl PhaseTimings {
    #[inline]
    pub fn new(phase: Phase, elapsed: Duration, cells: usize, targets: usize) -> Self {
        Self {
            phase,
            elapsed,
            cells,
            targets,
        }
    }

    pub fn report(&self) {
        let ms = self.elapsed.as_secs_f64() * 1000.0;
        let work = (self.cells * self.targets).max(1) as f64;
        let ns_per = self.elapsed.as_secs_f64() * 1e9 / work;
        eprintln!(
            "timing {:<16} {:7.1}ms cells={} targets={} ({:.2} ns/cell-target)",
            self.phase.name(),
            ms,
            self.cells,
            self.targets,
            ns_per
        );
    }
}

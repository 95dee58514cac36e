//! Zero-cost timing instrumentation for the grid passes.
//!
//! When the `timing` feature is enabled, each pass reports its wall time to
//! stderr. When disabled, all types become zero-sized and all methods compile away.

/// Pass being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nearest-target assignment of every cell.
    Fill,
    /// Total-distance threshold count.
    ThresholdCount,
}

#[cfg(feature = "timing")]
impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Fill => "fill",
            Phase::ThresholdCount => "threshold_count",
        }
    }
}

#[cfg(feature = "timing")]
mod real;
#[cfg(not(feature = "timing"))]
mod stub;

#[cfg(feature = "timing")]
pub use real::*;
#[cfg(not(feature = "timing"))]
pub use stub::*;

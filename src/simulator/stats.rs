//! Hit-ratio arithmetic and per-run statistics.

use std::fmt;

/// Fraction of references that did not fault, in `[0, 1]`.
///
/// Returns `0.0` for an empty reference string. A fault count larger than
/// the number of references is clamped to zero hits.
///
/// # Example
/// ```
/// use pagesim::hit_ratio;
///
/// assert_eq!(hit_ratio(0, 0), 0.0);
/// assert_eq!(hit_ratio(10, 0), 1.0);
/// assert_eq!(hit_ratio(10, 10), 0.0);
/// assert_eq!(hit_ratio(4, 1), 0.75);
/// ```
pub fn hit_ratio(total_references: usize, faults: usize) -> f64 {
    if total_references == 0 {
        0.0
    } else {
        total_references.saturating_sub(faults) as f64 / total_references as f64
    }
}

/// Counters produced by one simulation.
///
/// Plain `Copy` data so it can be compared, printed and passed around
/// without holding on to the snapshots of the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationStats {
    /// Length of the reference string.
    pub references: usize,

    /// References that were not resident when requested.
    pub faults: usize,

    /// Faults that had to push a resident page out.
    pub evictions: usize,
}

impl SimulationStats {
    pub fn hits(&self) -> usize {
        self.references.saturating_sub(self.faults)
    }

    /// Calculate hit ratio (0.0 to 1.0).
    pub fn hit_ratio(&self) -> f64 {
        hit_ratio(self.references, self.faults)
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "faults: {}, hits: {}, evictions: {}, hit_ratio: {:.2}%",
            self.faults,
            self.hits(),
            self.evictions,
            self.hit_ratio() * 100.0
        )
    }
}

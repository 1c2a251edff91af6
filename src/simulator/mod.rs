//! Page replacement simulation.
//!
//! Every policy shares the same fault-counting protocol: the driver
//! [`run`] presents each reference to a [`Replacer`] in order, counts one
//! fault per non-resident reference, and optionally copies the resident set
//! after each step. Replacers only decide what to evict.
//!
//! # Components
//! - [`FrameSet`] - Bounded ordered set of resident pages
//! - [`replacer`] - FIFO, LRU and Optimal policies
//! - [`Simulation`] - Result of one run (fault count + snapshots)
//! - [`Policy`] - Names the three policies in their fixed comparison order
//! - [`SimulationStats`] / [`hit_ratio`] - Derived metrics

mod frame_set;
mod policy;
pub mod replacer;
mod stats;

use std::fmt;

use tracing::{debug, trace};

use crate::common::Result;

pub use frame_set::FrameSet;
pub use policy::Policy;
pub use replacer::{Access, FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
pub use stats::{hit_ratio, SimulationStats};

/// Outcome of simulating one policy over one reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation<P> {
    /// Length of the reference string.
    pub references: usize,

    /// Number of page faults.
    pub faults: usize,

    /// Number of faults that evicted a resident page.
    pub evictions: usize,

    /// Resident set after each reference, head first.
    ///
    /// Empty unless the run was verbose.
    pub snapshots: Vec<Vec<P>>,
}

impl<P> Simulation<P> {
    pub fn hits(&self) -> usize {
        self.references.saturating_sub(self.faults)
    }

    pub fn hit_ratio(&self) -> f64 {
        hit_ratio(self.references, self.faults)
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            references: self.references,
            faults: self.faults,
            evictions: self.evictions,
        }
    }
}

/// Drive `replacer` over every reference in `pages`.
///
/// Snapshots never influence the outcome; they are copied after the
/// replacer has handled the reference.
pub fn run<P, R>(mut replacer: R, pages: &[P], verbose: bool) -> Simulation<P>
where
    P: Clone + fmt::Debug,
    R: Replacer<P>,
{
    let mut faults = 0;
    let mut evictions = 0;
    let mut snapshots = Vec::with_capacity(if verbose { pages.len() } else { 0 });

    for position in 0..pages.len() {
        if let Access::Fault { evicted } = replacer.access(pages, position) {
            faults += 1;
            if let Some(victim) = evicted {
                evictions += 1;
                trace!(
                    policy = replacer.name(),
                    position,
                    page = ?pages[position],
                    ?victim,
                    "evicted"
                );
            }
        }
        debug_assert!(replacer.resident().len() <= replacer.capacity());

        if verbose {
            snapshots.push(replacer.resident().to_vec());
        }
    }

    debug!(
        policy = replacer.name(),
        frames = replacer.capacity(),
        references = pages.len(),
        faults,
        evictions,
        "simulation complete"
    );

    Simulation {
        references: pages.len(),
        faults,
        evictions,
        snapshots,
    }
}

/// Simulate FIFO replacement.
///
/// # Errors
/// [`Error::InvalidFrameCount`](crate::Error::InvalidFrameCount) if `frames` is zero.
///
/// # Example
/// ```
/// use pagesim::simulator::fifo;
///
/// let sim = fifo(&[1, 2, 3, 4, 1, 2, 5], 3, false).unwrap();
/// assert_eq!(sim.faults, 7);
/// assert!(sim.snapshots.is_empty());
/// ```
pub fn fifo<P>(pages: &[P], frames: usize, verbose: bool) -> Result<Simulation<P>>
where
    P: Clone + PartialEq + fmt::Debug,
{
    Ok(run(FifoReplacer::new(frames)?, pages, verbose))
}

/// Simulate LRU replacement.
///
/// # Errors
/// [`Error::InvalidFrameCount`](crate::Error::InvalidFrameCount) if `frames` is zero.
pub fn lru<P>(pages: &[P], frames: usize, verbose: bool) -> Result<Simulation<P>>
where
    P: Clone + PartialEq + fmt::Debug,
{
    Ok(run(LruReplacer::new(frames)?, pages, verbose))
}

/// Simulate Belady's Optimal replacement.
///
/// # Errors
/// [`Error::InvalidFrameCount`](crate::Error::InvalidFrameCount) if `frames` is zero.
pub fn optimal<P>(pages: &[P], frames: usize, verbose: bool) -> Result<Simulation<P>>
where
    P: Clone + PartialEq + fmt::Debug,
{
    Ok(run(OptimalReplacer::new(frames)?, pages, verbose))
}

//! Optimal (Belady) replacement policy.
//!
//! Offline: the victim is chosen by looking at the remainder of the
//! reference string, so it cannot run against a live request stream.

use crate::common::Result;
use crate::simulator::replacer::{Access, Replacer};
use crate::simulator::FrameSet;

/// Evicts the resident page needed farthest in the future.
///
/// # Victim selection
/// Residents are scanned head to tail (load order, evicted pages removed):
/// 1. The first resident that never appears again is evicted at once.
/// 2. Otherwise the resident with the largest next-occurrence index wins;
///    among equal indices the one scanned first is kept.
///
/// Each step scans the remaining references once per resident page, so a
/// full run is `O(n² · frames)` in the worst case.
#[derive(Debug, Clone)]
pub struct OptimalReplacer<P> {
    frames: FrameSet<P>,
}

impl<P: Clone + PartialEq> OptimalReplacer<P> {
    /// Create an Optimal replacer with `frames` slots.
    pub fn new(frames: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(frames)?,
        })
    }

    /// Index into the frame set of the page to evict, given the references
    /// that follow the current one.
    fn victim(&self, future: &[P]) -> Option<usize> {
        let mut victim = None;
        let mut farthest: Option<usize> = None;

        for (idx, resident) in self.frames.iter().enumerate() {
            match future.iter().position(|p| p == resident) {
                None => return Some(idx),
                Some(next) => {
                    if farthest.map_or(true, |f| next > f) {
                        farthest = Some(next);
                        victim = Some(idx);
                    }
                }
            }
        }
        victim
    }
}

impl<P: Clone + PartialEq> Replacer<P> for OptimalReplacer<P> {
    fn access(&mut self, pages: &[P], position: usize) -> Access<P> {
        let page = &pages[position];
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let evicted = if self.frames.is_full() {
            self.victim(&pages[position + 1..])
                .and_then(|idx| self.frames.remove_at(idx))
        } else {
            None
        };
        self.frames.push(page.clone());
        Access::Fault { evicted }
    }

    fn resident(&self) -> &[P] {
        self.frames.as_slice()
    }

    fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    fn name(&self) -> &'static str {
        "Optimal"
    }
}

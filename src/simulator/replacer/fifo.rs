//! FIFO (First-In-First-Out) replacement policy.

use crate::common::Result;
use crate::simulator::replacer::{Access, Replacer};
use crate::simulator::FrameSet;

/// Evicts pages in the order they were loaded.
///
/// Re-referencing a resident page does not reorder it: first in stays first
/// out regardless of reuse.
#[derive(Debug, Clone)]
pub struct FifoReplacer<P> {
    /// Resident pages in load order (head = oldest).
    frames: FrameSet<P>,
}

impl<P: Clone + PartialEq> FifoReplacer<P> {
    /// Create a FIFO replacer with `frames` slots.
    pub fn new(frames: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(frames)?,
        })
    }
}

impl<P: Clone + PartialEq> Replacer<P> for FifoReplacer<P> {
    fn access(&mut self, pages: &[P], position: usize) -> Access<P> {
        let page = &pages[position];
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let evicted = if self.frames.is_full() {
            self.frames.pop_front()
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
        "FIFO"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(replacer: &mut FifoReplacer<u32>, pages: &[u32]) -> Vec<Access<u32>> {
        (0..pages.len()).map(|i| replacer.access(pages, i)).collect()
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(3).unwrap();
        let accesses = feed(&mut replacer, &[0, 1, 2, 3]);

        assert_eq!(accesses[0], Access::Fault { evicted: None });
        assert_eq!(accesses[2], Access::Fault { evicted: None });
        // Should evict in FIFO order
        assert_eq!(accesses[3], Access::Fault { evicted: Some(0) });
        assert_eq!(replacer.resident(), &[1, 2, 3]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(2).unwrap();
        let accesses = feed(&mut replacer, &[0, 1, 0, 2]);

        assert_eq!(accesses[2], Access::Hit);
        // FIFO: page 0 was first, is evicted first even though it was just used
        assert_eq!(accesses[3], Access::Fault { evicted: Some(0) });
        assert_eq!(replacer.resident(), &[1, 2]);
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(1).unwrap();
        let accesses = feed(&mut replacer, &[5, 5, 6]);

        assert_eq!(accesses[1], Access::Hit);
        assert_eq!(accesses[2], Access::Fault { evicted: Some(5) });
        assert_eq!(replacer.capacity(), 1);
    }

    #[test]
    fn test_fifo_zero_frames_rejected() {
        assert!(FifoReplacer::<u32>::new(0).is_err());
    }
}

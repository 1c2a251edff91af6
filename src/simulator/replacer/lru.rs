//! LRU (Least Recently Used) replacement policy.

use crate::common::Result;
use crate::simulator::replacer::{Access, Replacer};
use crate::simulator::FrameSet;

/// Evicts the page whose last reference is oldest.
///
/// Recency is logical: the frame set is kept in reference order, a hit moves
/// the page to the tail, and the head is always the victim. Exactly one
/// page's recency changes per reference, so ties cannot occur.
#[derive(Debug, Clone)]
pub struct LruReplacer<P> {
    /// Resident pages in recency order (head = least recently used).
    frames: FrameSet<P>,
}

impl<P: Clone + PartialEq> LruReplacer<P> {
    /// Create an LRU replacer with `frames` slots.
    pub fn new(frames: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(frames)?,
        })
    }
}

impl<P: Clone + PartialEq> Replacer<P> for LruReplacer<P> {
    fn access(&mut self, pages: &[P], position: usize) -> Access<P> {
        let page = &pages[position];
        if self.frames.touch(page) {
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
        "LRU"
    }
}

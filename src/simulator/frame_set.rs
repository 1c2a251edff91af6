//! Bounded ordered set of resident pages.

use crate::common::{Error, Result};

/// The pages currently resident in memory.
///
/// Index 0 is the head. What "head" means depends on the policy: the oldest
/// page for FIFO, the least recently used page for LRU. Optimal does not
/// rely on the order for correctness but scans it front to back when picking
/// a victim, so insertion order decides ties.
///
/// Membership and removal are linear scans. Reference strings handled here
/// are small, and a plain `Vec` keeps snapshots trivially cheap to copy.
///
/// # Example
/// ```
/// use pagesim::simulator::FrameSet;
///
/// let mut frames = FrameSet::new(2).unwrap();
/// frames.push(7);
/// frames.push(0);
/// assert!(frames.is_full());
/// assert_eq!(frames.pop_front(), Some(7));
/// assert_eq!(frames.as_slice(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet<P> {
    pages: Vec<P>,
    capacity: usize,
}

impl<P: PartialEq> FrameSet<P> {
    /// Create an empty frame set holding at most `capacity` pages.
    ///
    /// Storage grows with the resident pages, not with `capacity`, so any
    /// frame count is accepted.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidFrameCount(0));
        }
        Ok(Self {
            pages: Vec::new(),
            capacity,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    pub fn contains(&self, page: &P) -> bool {
        self.pages.contains(page)
    }

    /// Index of `page` counted from the head.
    pub fn position(&self, page: &P) -> Option<usize> {
        self.pages.iter().position(|p| p == page)
    }

    /// Append a page at the tail.
    ///
    /// Callers must make room first; pushing into a full set is a bug.
    pub fn push(&mut self, page: P) {
        debug_assert!(!self.is_full(), "push into full frame set");
        self.pages.push(page);
    }

    /// Remove and return the head page.
    pub fn pop_front(&mut self) -> Option<P> {
        if self.pages.is_empty() {
            None
        } else {
            Some(self.pages.remove(0))
        }
    }

    /// Remove `page` wherever it sits.
    pub fn remove(&mut self, page: &P) -> Option<P> {
        let idx = self.position(page)?;
        Some(self.pages.remove(idx))
    }

    /// Remove the page at `idx` counted from the head.
    pub fn remove_at(&mut self, idx: usize) -> Option<P> {
        if idx < self.pages.len() {
            Some(self.pages.remove(idx))
        } else {
            None
        }
    }

    /// Move `page` to the tail. Returns false if it is not resident.
    pub fn touch(&mut self, page: &P) -> bool {
        match self.remove(page) {
            Some(p) => {
                self.pages.push(p);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_set_rejects_zero_capacity() {
        assert!(matches!(
            FrameSet::<u32>::new(0),
            Err(Error::InvalidFrameCount(0))
        ));
    }

    #[test]
    fn test_frame_set_huge_capacity() {
        let mut frames = FrameSet::new(usize::MAX).unwrap();
        frames.push(1u64);
        frames.push(2);

        assert_eq!(frames.capacity(), usize::MAX);
        assert_eq!(frames.len(), 2);
        assert!(!frames.is_full());
    }

    #[test]
    fn test_frame_set_push_and_pop_order() {
        let mut frames = FrameSet::new(3).unwrap();
        frames.push(1);
        frames.push(2);
        frames.push(3);

        assert!(frames.is_full());
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.pop_front(), Some(1));
        assert_eq!(frames.pop_front(), Some(2));
        assert_eq!(frames.pop_front(), Some(3));
        assert_eq!(frames.pop_front(), None);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_frame_set_touch_moves_to_tail() {
        let mut frames = FrameSet::new(3).unwrap();
        frames.push(1);
        frames.push(2);
        frames.push(3);

        assert!(frames.touch(&1));
        assert_eq!(frames.as_slice(), &[2, 3, 1]);
        assert!(!frames.touch(&9));
        assert_eq!(frames.as_slice(), &[2, 3, 1]);
    }

    #[test]
    fn test_frame_set_remove_middle() {
        let mut frames = FrameSet::new(3).unwrap();
        frames.push(1);
        frames.push(2);
        frames.push(3);

        assert_eq!(frames.remove(&2), Some(2));
        assert_eq!(frames.remove(&2), None);
        assert_eq!(frames.as_slice(), &[1, 3]);
        assert_eq!(frames.position(&3), Some(1));
        assert!(!frames.is_full());
        assert_eq!(frames.remove_at(5), None);
        assert_eq!(frames.remove_at(0), Some(1));
    }
}

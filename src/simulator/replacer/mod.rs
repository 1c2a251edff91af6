//! Replacement policy implementations (replacers).
//!
//! - [`FifoReplacer`] - evicts the page resident the longest
//! - [`LruReplacer`] - evicts the least recently referenced page
//! - [`OptimalReplacer`] - Belady's offline policy, evicts the page needed farthest ahead

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Outcome of presenting one reference to a replacer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,

    /// The page was loaded. `evicted` holds the page pushed out to make
    /// room, or `None` while free frames remained.
    Fault { evicted: Option<P> },
}

/// A page replacement policy driven one reference at a time.
///
/// The whole reference string is passed on every call so that offline
/// policies can look ahead. Online policies only read `pages[position]`.
pub trait Replacer<P> {
    /// Process the reference at `pages[position]`.
    ///
    /// `position` is always in bounds; the driver walks the string in order
    /// and calls this exactly once per reference.
    fn access(&mut self, pages: &[P], position: usize) -> Access<P>;

    /// Pages currently resident, head first.
    fn resident(&self) -> &[P];

    /// Number of frames available.
    fn capacity(&self) -> usize;

    /// Short human-readable policy name.
    fn name(&self) -> &'static str;
}

//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies a page in a reference string.
///
/// Signed so that any integer token the user types is accepted.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(PageId)
            .map_err(|_| Error::InvalidPage(s.to_string()))
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

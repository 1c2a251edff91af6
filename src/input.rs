//! Reading a workload: a reference string and a frame count.
//!
//! The expected layout is two lines, pages first:
//! ```text
//! 7 0 1 2 0 3 0 4 2 3 0 3
//! 3
//! ```
//! Parse failures surface as input errors and nothing is simulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::{Error, PageId, Result, SimConfig};

/// Parse a whitespace-separated list of page numbers.
///
/// A blank line is an empty reference string, not an error.
pub fn parse_pages(line: &str) -> Result<Vec<PageId>> {
    line.split_whitespace().map(str::parse).collect()
}

/// Parse the frame count line.
///
/// Only checks that it is an integer; range checks happen in
/// [`SimConfig::new`].
pub fn parse_frames(line: &str) -> Result<i64> {
    let token = line.trim();
    if token.is_empty() {
        return Err(Error::MissingFrames);
    }
    token
        .parse()
        .map_err(|_| Error::InvalidFrames(token.to_string()))
}

/// A parsed but not yet validated simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub pages: Vec<PageId>,
    pub frames: i64,
}

impl Workload {
    /// Parse the two input lines.
    pub fn parse(pages_line: &str, frames_line: &str) -> Result<Self> {
        let pages = parse_pages(pages_line)?;
        let frames = parse_frames(frames_line)?;
        debug!(references = pages.len(), frames, "parsed workload");
        Ok(Self { pages, frames })
    }

    /// Read the pages line and the frame count line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let pages_line = lines.next().transpose()?.unwrap_or_default();
        let frames_line = lines.next().transpose()?.ok_or(Error::MissingFrames)?;
        Self::parse(&pages_line, &frames_line)
    }

    /// Read a workload file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the frame count into a run configuration.
    pub fn config(&self) -> Result<SimConfig> {
        SimConfig::new(self.frames)
    }
}

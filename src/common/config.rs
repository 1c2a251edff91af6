//! Configuration for a simulation run.

use crate::common::{Error, Result};

/// Reference string shown to the user when input is malformed.
pub const EXAMPLE_REFERENCE_STRING: &str = "7 0 1 2 0 3 0 4 2 3 0 3";

/// Log filter used by the binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings shared by every policy in one comparison.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::new(3).unwrap().with_verbose(true);
/// assert_eq!(config.frames, 3);
/// assert!(config.verbose);
/// assert!(SimConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of resident pages each policy may hold.
    pub frames: usize,

    /// Record a frame-set snapshot after every reference.
    pub verbose: bool,

    /// Run the policies on separate threads.
    pub parallel: bool,
}

impl SimConfig {
    /// Validate a raw frame count. Anything below one is rejected.
    pub fn new(frames: i64) -> Result<Self> {
        if frames < 1 {
            return Err(Error::InvalidFrameCount(frames));
        }
        let frames = usize::try_from(frames).map_err(|_| Error::InvalidFrameCount(frames))?;
        Ok(Self {
            frames,
            verbose: false,
            parallel: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimConfig::new(4).unwrap();
        assert_eq!(config.frames, 4);
        assert!(!config.verbose);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_rejects_non_positive() {
        assert!(matches!(SimConfig::new(0), Err(Error::InvalidFrameCount(0))));
        assert!(matches!(SimConfig::new(-3), Err(Error::InvalidFrameCount(-3))));
    }

    #[test]
    fn test_config_builders() {
        let config = SimConfig::new(1).unwrap().with_verbose(true).with_parallel(true);
        assert!(config.verbose);
        assert!(config.parallel);
    }
}

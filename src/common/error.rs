//! Error types for pagesim.

use thiserror::Error;

use crate::common::config::EXAMPLE_REFERENCE_STRING;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Malformed input is reported to the user as one message carrying an
/// example of valid input; see [`Error::is_input_error`].
#[derive(Debug, Error)]
pub enum Error {
    /// A page token could not be parsed as an integer.
    #[error(
        "Invalid input: page `{0}` is not an integer. Example page input: {}",
        EXAMPLE_REFERENCE_STRING
    )]
    InvalidPage(String),

    /// The frame count could not be parsed as an integer.
    #[error(
        "Invalid input: frame count `{0}` is not an integer. Example page input: {}",
        EXAMPLE_REFERENCE_STRING
    )]
    InvalidFrames(String),

    /// No frame count was supplied.
    #[error(
        "Invalid input: missing frame count. Example page input: {}",
        EXAMPLE_REFERENCE_STRING
    )]
    MissingFrames,

    /// Frame count below one.
    ///
    /// Every simulator rejects this before touching the reference string.
    #[error("Invalid frame count {0}: at least one frame is required")]
    InvalidFrameCount(i64),

    /// A policy name other than FIFO, LRU or Optimal.
    #[error("Unknown policy `{0}` (expected fifo, lru or optimal)")]
    UnknownPolicy(String),

    /// I/O error while reading stdin or an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by malformed or out-of-range user input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFrameCount(0);
        assert_eq!(
            format!("{}", err),
            "Invalid frame count 0: at least one frame is required"
        );

        let err = Error::InvalidPage("x".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("`x`"));
        assert!(msg.ends_with("7 0 1 2 0 3 0 4 2 3 0 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
        assert!(!Error::from(std::io::Error::other("x")).is_input_error());
    }

    #[test]
    fn test_input_errors_classified() {
        assert!(Error::MissingFrames.is_input_error());
        assert!(Error::InvalidFrames("three".into()).is_input_error());
        assert!(Error::InvalidFrameCount(-2).is_input_error());
    }
}

//! Error types for rs-htmlscrubber.
//!
//! This module defines the error types returned by scrubbing operations.

/// Error type for scrubbing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be decoded as UTF-8 text.
    #[error("Input decoding failed: {0}")]
    Input(String),

    /// An input file could not be read.
    #[error("File read failed: {0}")]
    Io(String),
}

/// Result type alias for scrubbing operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating payloads and codewords
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty payload, non-binary text, or a codeword length no payload can produce
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A 1-indexed bit position outside the codeword
    #[error("Position {position} is out of range for a codeword of {length} bits")]
    PositionOutOfRange { position: usize, length: usize },
}

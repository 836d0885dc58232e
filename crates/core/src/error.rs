//! Error types for the idprep PRECIS library.

use thiserror::Error;

/// Primary error type for preparation, enforcement and comparison operations.
///
/// Every variant is a permanent, input-dependent failure; there is no retry
/// or recovery path inside the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisError {
    /// A code point failed classification under the profile's string class.
    /// `position` is the byte offset of the code point in the scanned string.
    #[error("invalid code point U+{code_point:04X} at byte offset {position}")]
    InvalidCodePoint { position: usize, code_point: u32 },

    /// The canonical string is zero-length after all rules were applied.
    #[error("string is empty after applying the profile rules")]
    EmptyResult,

    /// One of the six Bidi Rule conditions failed.
    #[error("bidi rule condition {condition} violated: {description}")]
    DirectionalityViolation {
        condition: u8,
        description: &'static str,
    },

    /// The input failed IDNA ASCII/Unicode label conversion.
    #[error("malformed domain label: {0}")]
    MalformedLabel(String),

    /// The enforced result exceeds the profile's byte-length limit.
    #[error("enforced string is {0} bytes, exceeding the 1023 byte limit")]
    OversizedResult(usize),
}

/// Convenience Result type alias for PrecisError.
pub type Result<T> = std::result::Result<T, PrecisError>;

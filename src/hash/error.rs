//! SHA-256 error types

use thiserror::Error;

/// Errors surfaced by digest computation and digest parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The padded message buffer could not be allocated
    #[error("failed to allocate {bytes} bytes for the padded message")]
    AllocationFailed {
        /// Requested buffer size
        bytes: u64,
    },

    /// Input length cannot be encoded in the 64-bit bit-length field
    #[error("input too long: {len} bytes (max {max})")]
    InputTooLong {
        /// Input length in bytes
        len: u64,
        /// Maximum allowed
        max: u64,
    },

    /// Textual digest was not 64 hex characters
    #[error("invalid hex digest: {reason}")]
    InvalidHex {
        /// What was wrong with the input
        reason: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DigestError>;

//! Error types for the unified API.

use ots_attest_core::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors that can occur during attestation operations.
#[derive(Debug, Error)]
pub enum AttestError {
    /// Record decoding failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Record encoding failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Input was not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input continued past the end of the record.
    #[error("{remaining} bytes after attestation record of {consumed} bytes")]
    TrailingBytes { consumed: usize, remaining: usize },
}

/// Result type for attestation operations.
pub type Result<T> = std::result::Result<T, AttestError>;

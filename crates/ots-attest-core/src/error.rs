//! Error types for attestation decoding and encoding.

use thiserror::Error;

/// Errors that can occur while decoding an attestation record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("declared length {len} outside bounds [{min}, {max}]")]
    LengthOutOfBounds { len: u64, min: usize, max: usize },

    #[error("attestation payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: u64, max: usize },

    #[error("pending attestation uri too large: {len} bytes (max {max})")]
    UriTooLarge { len: u64, max: usize },

    #[error("malformed varint: {0}")]
    MalformedVarint(&'static str),

    #[error("expected end of payload, {remaining} bytes left over")]
    TrailingPayloadBytes { remaining: usize },

    #[error("pending attestation uri is not valid utf-8: {0}")]
    InvalidUri(#[from] std::str::Utf8Error),

    #[error("invalid attestation tag: {0}")]
    InvalidTag(String),
}

/// Errors that can occur while encoding an attestation record.
///
/// Encoding applies the decoder's bounds so that every encoded record
/// can be read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("attestation payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("pending attestation uri too large: {len} bytes (max {max})")]
    UriTooLarge { len: usize, max: usize },
}

//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// How a pending attestation's URI bytes are treated when they are not UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UriPolicy {
    /// Reject the record with [`DecodeError::InvalidUri`](crate::DecodeError::InvalidUri).
    #[default]
    Strict,
    /// Keep the raw bytes; the decoded value reports `is_utf8() == false`.
    PreserveRaw,
}

/// Configuration for attestation decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Treatment of non-UTF-8 pending URIs.
    pub uri_policy: UriPolicy,
}

impl DecodeConfig {
    /// A config that keeps non-UTF-8 URIs instead of rejecting them.
    pub fn preserve_raw() -> Self {
        Self {
            uri_policy: UriPolicy::PreserveRaw,
        }
    }
}

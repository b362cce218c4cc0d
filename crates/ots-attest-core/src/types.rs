//! Strong type definitions for attestation records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;

/// Length in bytes of every attestation tag.
pub const TAG_SIZE: usize = 8;

/// An 8-byte attestation tag, the discriminant of an attestation record.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttestationTag(pub [u8; TAG_SIZE]);

impl AttestationTag {
    /// Tag of a pending (calendar) attestation.
    pub const PENDING: Self = Self([0x83, 0xdf, 0xe3, 0x0d, 0x2e, 0xf9, 0x0c, 0x8e]);

    /// Tag of a Bitcoin block header attestation.
    pub const BITCOIN: Self = Self([0x05, 0x88, 0x96, 0x0d, 0x73, 0xd7, 0x19, 0x01]);

    /// Create a new tag from raw bytes.
    pub const fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(s).map_err(|e| DecodeError::InvalidTag(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for AttestationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttestationTag({})", self.to_hex())
    }
}

impl fmt::Display for AttestationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for AttestationTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; TAG_SIZE]> for AttestationTag {
    fn from(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for AttestationTag {
    type Error = DecodeError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; TAG_SIZE] = slice.try_into().map_err(|_| {
            DecodeError::InvalidTag(format!("expected {} bytes, got {}", TAG_SIZE, slice.len()))
        })?;
        Ok(Self(arr))
    }
}

//! Attestation values: the leaves of a timestamp proof.
//!
//! An attestation says how a timestamp can be checked externally. Two kinds
//! are understood here:
//!
//! - [`PendingAttestation`]: ask a calendar server later for an upgraded proof
//! - [`BitcoinAttestation`]: the commitment is in the block at a given height
//!
//! Anything else decodes to [`UnknownAttestation`], which keeps the raw tag
//! and payload so a proof can be re-serialized unchanged.
//!
//! Record layout on the wire:
//!
//! ```text
//! [ tag (8) ][ varint payload length (<= 8192) ][ payload ]
//! ```

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::config::{DecodeConfig, UriPolicy};
use crate::context::{DeserializationContext, SerializationContext};
use crate::error::{DecodeError, EncodeError};
use crate::types::AttestationTag;

/// Maximum size of an attestation payload.
pub const MAX_PAYLOAD_SIZE: usize = 8192;

/// Maximum length of a pending attestation's URI.
pub const MAX_URI_LENGTH: usize = 1000;

/// A decoded attestation record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attestation {
    Pending(PendingAttestation),
    Bitcoin(BitcoinAttestation),
    Unknown(UnknownAttestation),
}

impl Attestation {
    /// The record's tag.
    pub fn tag(&self) -> AttestationTag {
        match self {
            Self::Pending(_) => AttestationTag::PENDING,
            Self::Bitcoin(_) => AttestationTag::BITCOIN,
            Self::Unknown(u) => u.tag,
        }
    }

    /// Whether the record's kind was recognized by the decoder.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Encode the variant-specific body (the bytes inside the length prefix).
    pub fn payload_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Pending(p) => p.payload_bytes(),
            Self::Bitcoin(b) => Ok(b.payload_bytes()),
            Self::Unknown(u) => Ok(u.payload.to_vec()),
        }
    }

    /// Write the full record: tag, payload length, payload.
    pub fn encode(&self, ctx: &mut SerializationContext) -> Result<(), EncodeError> {
        let payload = self.payload_bytes()?;
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(EncodeError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }
        ctx.write_bytes(self.tag().as_bytes());
        ctx.write_varbytes(&payload);
        Ok(())
    }

    /// Encode the full record into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut ctx = SerializationContext::new();
        self.encode(&mut ctx)?;
        Ok(ctx.into_bytes())
    }
}

impl fmt::Display for Attestation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(p) => fmt::Display::fmt(p, f),
            Self::Bitcoin(b) => fmt::Display::fmt(b, f),
            Self::Unknown(u) => fmt::Display::fmt(u, f),
        }
    }
}

impl From<PendingAttestation> for Attestation {
    fn from(p: PendingAttestation) -> Self {
        Self::Pending(p)
    }
}

impl From<BitcoinAttestation> for Attestation {
    fn from(b: BitcoinAttestation) -> Self {
        Self::Bitcoin(b)
    }
}

impl From<UnknownAttestation> for Attestation {
    fn from(u: UnknownAttestation) -> Self {
        Self::Unknown(u)
    }
}

/// A timestamp submitted to a calendar but not yet confirmed on chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingAttestation {
    uri: Vec<u8>,
}

impl PendingAttestation {
    /// Create from a calendar URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into().into_bytes(),
        }
    }

    /// Create from raw URI bytes, which need not be UTF-8.
    pub fn from_raw(uri: impl Into<Vec<u8>>) -> Self {
        Self { uri: uri.into() }
    }

    /// Decode the body of a pending record.
    pub fn decode(
        ctx: &mut DeserializationContext<'_>,
        config: &DecodeConfig,
    ) -> Result<Self, DecodeError> {
        let raw = ctx.read_varbytes(0, MAX_URI_LENGTH).map_err(|e| match e {
            DecodeError::LengthOutOfBounds { len, max, .. } => DecodeError::UriTooLarge { len, max },
            other => other,
        })?;

        if config.uri_policy == UriPolicy::Strict {
            std::str::from_utf8(raw)?;
        }

        Ok(Self::from_raw(raw))
    }

    /// The calendar URI, with invalid UTF-8 replaced.
    pub fn uri(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.uri)
    }

    /// The URI exactly as it appeared on the wire.
    pub fn uri_bytes(&self) -> &[u8] {
        &self.uri
    }

    /// Whether the URI is valid UTF-8.
    pub fn is_utf8(&self) -> bool {
        std::str::from_utf8(&self.uri).is_ok()
    }

    fn payload_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        if self.uri.len() > MAX_URI_LENGTH {
            return Err(EncodeError::UriTooLarge {
                len: self.uri.len(),
                max: MAX_URI_LENGTH,
            });
        }
        let mut ctx = SerializationContext::new();
        ctx.write_varbytes(&self.uri);
        Ok(ctx.into_bytes())
    }
}

impl fmt::Display for PendingAttestation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VERIFY PendingAttestation(url={})", self.uri())
    }
}

/// A commitment included in the Bitcoin block at `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitcoinAttestation {
    pub height: u64,
}

impl BitcoinAttestation {
    pub fn new(height: u64) -> Self {
        Self { height }
    }

    /// Decode the body of a Bitcoin record.
    pub fn decode(ctx: &mut DeserializationContext<'_>) -> Result<Self, DecodeError> {
        let height = ctx.read_varuint()?;
        Ok(Self { height })
    }

    fn payload_bytes(&self) -> Vec<u8> {
        let mut ctx = SerializationContext::new();
        ctx.write_varuint(self.height);
        ctx.into_bytes()
    }
}

impl fmt::Display for BitcoinAttestation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VERIFY BitcoinAttestation(height={})", self.height)
    }
}

/// A record whose tag is not in the registry.
///
/// The payload is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnknownAttestation {
    pub tag: AttestationTag,
    pub payload: Bytes,
}

impl UnknownAttestation {
    pub fn new(tag: AttestationTag, payload: impl Into<Bytes>) -> Self {
        Self {
            tag,
            payload: payload.into(),
        }
    }
}

impl fmt::Display for UnknownAttestation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnknownAttestation(tag={}, bytes=\"{}\")",
            self.tag,
            self.payload.escape_ascii()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_decode() {
        let mut body = SerializationContext::new();
        body.write_varbytes(b"https://alice.btc.calendar.opentimestamps.org");
        let bytes = body.into_bytes();

        let mut ctx = DeserializationContext::new(&bytes);
        let pending = PendingAttestation::decode(&mut ctx, &DecodeConfig::default()).unwrap();
        assert_eq!(pending.uri(), "https://alice.btc.calendar.opentimestamps.org");
        assert!(pending.is_utf8());
        assert!(ctx.is_eof());
    }

    #[test]
    fn test_pending_uri_too_large() {
        let mut body = SerializationContext::new();
        body.write_varbytes(&[b'a'; MAX_URI_LENGTH + 1]);
        let bytes = body.into_bytes();

        let mut ctx = DeserializationContext::new(&bytes);
        assert_eq!(
            PendingAttestation::decode(&mut ctx, &DecodeConfig::default()),
            Err(DecodeError::UriTooLarge {
                len: MAX_URI_LENGTH as u64 + 1,
                max: MAX_URI_LENGTH
            })
        );
    }

    #[test]
    fn test_pending_invalid_utf8_strict() {
        let bytes = [0x02, 0xff, 0xfe];
        let mut ctx = DeserializationContext::new(&bytes);
        assert!(matches!(
            PendingAttestation::decode(&mut ctx, &DecodeConfig::default()),
            Err(DecodeError::InvalidUri(_))
        ));
    }

    #[test]
    fn test_pending_invalid_utf8_preserved() {
        let bytes = [0x02, 0xff, 0xfe];
        let mut ctx = DeserializationContext::new(&bytes);
        let pending = PendingAttestation::decode(&mut ctx, &DecodeConfig::preserve_raw()).unwrap();
        assert!(!pending.is_utf8());
        assert_eq!(pending.uri_bytes(), &[0xff, 0xfe]);
        assert_eq!(pending.uri(), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_bitcoin_decode() {
        let mut ctx = DeserializationContext::new(&[0xe8, 0x07]);
        assert_eq!(
            BitcoinAttestation::decode(&mut ctx).unwrap(),
            BitcoinAttestation::new(1000)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Attestation::from(PendingAttestation::new("https://example.com")).to_string(),
            "VERIFY PendingAttestation(url=https://example.com)"
        );
        assert_eq!(
            Attestation::from(BitcoinAttestation::new(358391)).to_string(),
            "VERIFY BitcoinAttestation(height=358391)"
        );
        let unknown = UnknownAttestation::new(AttestationTag::from_bytes([0xff; 8]), &b"a\"b\x00"[..]);
        assert_eq!(
            Attestation::from(unknown).to_string(),
            "UnknownAttestation(tag=ffffffffffffffff, bytes=\"a\\\"b\\x00\")"
        );
    }

    #[test]
    fn test_encode_bitcoin_record() {
        let bytes = Attestation::from(BitcoinAttestation::new(1000)).to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![0x05, 0x88, 0x96, 0x0d, 0x73, 0xd7, 0x19, 0x01, 0x02, 0xe8, 0x07]
        );
    }

    #[test]
    fn test_encode_rejects_oversized() {
        let pending = Attestation::from(PendingAttestation::new("a".repeat(MAX_URI_LENGTH + 1)));
        assert_eq!(
            pending.to_bytes(),
            Err(EncodeError::UriTooLarge {
                len: MAX_URI_LENGTH + 1,
                max: MAX_URI_LENGTH
            })
        );

        let unknown = Attestation::from(UnknownAttestation::new(
            AttestationTag::from_bytes([0; 8]),
            vec![0u8; MAX_PAYLOAD_SIZE + 1],
        ));
        assert_eq!(
            unknown.to_bytes(),
            Err(EncodeError::PayloadTooLarge {
                len: MAX_PAYLOAD_SIZE + 1,
                max: MAX_PAYLOAD_SIZE
            })
        );
    }

    #[test]
    fn test_tag_per_variant() {
        assert_eq!(
            Attestation::from(PendingAttestation::new("x")).tag(),
            AttestationTag::PENDING
        );
        assert_eq!(
            Attestation::from(BitcoinAttestation::new(0)).tag(),
            AttestationTag::BITCOIN
        );
        let tag = AttestationTag::from_bytes([1; 8]);
        let unknown = Attestation::from(UnknownAttestation::new(tag, Bytes::new()));
        assert_eq!(unknown.tag(), tag);
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_serde_json_shape() {
        let json = serde_json::to_value(Attestation::from(BitcoinAttestation::new(7))).unwrap();
        assert_eq!(json, serde_json::json!({"type": "bitcoin", "height": 7}));
    }
}

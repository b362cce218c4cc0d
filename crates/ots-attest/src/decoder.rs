//! The decoder: one entry point that owns a registry and its configuration.

use ots_attest_core::{
    parse_attestation_with, Attestation, DecodeConfig, DeserializationContext, TagRegistry,
};
use tracing::debug;

use crate::error::{AttestError, Result};

/// Decodes and encodes attestation records.
#[derive(Debug, Clone, Default)]
pub struct AttestationDecoder {
    registry: TagRegistry,
    config: DecodeConfig,
}

impl AttestationDecoder {
    /// Create a decoder with the standard registry.
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            registry: TagRegistry::standard(),
            config,
        }
    }

    /// Create a decoder with a custom registry.
    pub fn with_registry(registry: TagRegistry, config: DecodeConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decoding
    // ─────────────────────────────────────────────────────────────────────────

    /// Decode the record at the context's position, advancing past it.
    pub fn decode_from(&self, ctx: &mut DeserializationContext<'_>) -> Result<Attestation> {
        Ok(parse_attestation_with(ctx, &self.registry, &self.config)?)
    }

    /// Decode the record at the start of `bytes`.
    ///
    /// Returns the attestation and the number of bytes it occupied.
    pub fn decode_prefix(&self, bytes: &[u8]) -> Result<(Attestation, usize)> {
        let mut ctx = DeserializationContext::new(bytes);
        let attestation = self.decode_from(&mut ctx)?;
        let consumed = ctx.position();
        debug!(
            tag = %attestation.tag(),
            known = attestation.is_known(),
            consumed,
            "decoded attestation record"
        );
        Ok((attestation, consumed))
    }

    /// Decode `bytes` as exactly one record.
    pub fn decode(&self, bytes: &[u8]) -> Result<Attestation> {
        let (attestation, consumed) = self.decode_prefix(bytes)?;
        if consumed != bytes.len() {
            return Err(AttestError::TrailingBytes {
                consumed,
                remaining: bytes.len() - consumed,
            });
        }
        Ok(attestation)
    }

    /// Decode a hex-encoded record.
    pub fn decode_hex(&self, s: &str) -> Result<Attestation> {
        let bytes = hex::decode(s.trim())?;
        self.decode(&bytes)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Encoding
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode one record.
    pub fn encode(&self, attestation: &Attestation) -> Result<Vec<u8>> {
        Ok(attestation.to_bytes()?)
    }

    /// Encode one record as lowercase hex.
    pub fn encode_hex(&self, attestation: &Attestation) -> Result<String> {
        Ok(hex::encode(self.encode(attestation)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ots_attest_core::{BitcoinAttestation, DecodeError, PendingAttestation};

    #[test]
    fn test_decode_hex_bitcoin() {
        let decoder = AttestationDecoder::default();
        let att = decoder.decode_hex("0588960d73d7190102e807").unwrap();
        assert_eq!(att, Attestation::Bitcoin(BitcoinAttestation::new(1000)));
    }

    #[test]
    fn test_decode_rejects_bytes_after_record() {
        let decoder = AttestationDecoder::default();
        let err = decoder.decode_hex("0588960d73d7190102e80700").unwrap_err();
        assert!(matches!(
            err,
            AttestError::TrailingBytes {
                consumed: 11,
                remaining: 1
            }
        ));
    }

    #[test]
    fn test_decode_prefix_reports_consumed() {
        let decoder = AttestationDecoder::default();
        let bytes = hex::decode("0588960d73d7190102e807ffff").unwrap();
        let (att, consumed) = decoder.decode_prefix(&bytes).unwrap();
        assert_eq!(consumed, 11);
        assert!(att.is_known());
    }

    #[test]
    fn test_decode_hex_rejects_bad_hex() {
        let decoder = AttestationDecoder::default();
        assert!(matches!(
            decoder.decode_hex("0588zz"),
            Err(AttestError::Hex(_))
        ));
    }

    #[test]
    fn test_uri_policy_is_applied() {
        let record = "83dfe30d2ef90c8e0302fffe";

        let strict = AttestationDecoder::new(DecodeConfig::default());
        assert!(matches!(
            strict.decode_hex(record),
            Err(AttestError::Decode(DecodeError::InvalidUri(_)))
        ));

        let lenient = AttestationDecoder::new(DecodeConfig::preserve_raw());
        match lenient.decode_hex(record).unwrap() {
            Attestation::Pending(p) => {
                assert!(!p.is_utf8());
                assert_eq!(p.uri_bytes(), &[0xff, 0xfe]);
            }
            other => panic!("expected pending attestation, got {:?}", other),
        }
    }

    #[test]
    fn test_preserved_raw_uri_reencodes_unchanged() {
        let decoder = AttestationDecoder::new(DecodeConfig::preserve_raw());
        let record = "83dfe30d2ef90c8e0302fffe";
        let att = decoder.decode_hex(record).unwrap();
        assert_eq!(decoder.encode_hex(&att).unwrap(), record);
    }

    #[test]
    fn test_encode_hex() {
        let decoder = AttestationDecoder::default();
        let att = Attestation::Pending(PendingAttestation::new("ab"));
        assert_eq!(decoder.encode_hex(&att).unwrap(), "83dfe30d2ef90c8e03026162");
    }
}

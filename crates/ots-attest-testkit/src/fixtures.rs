//! Test fixtures and helpers.
//!
//! Hand-built records, including malformed ones an encoder would refuse to
//! produce.

use ots_attest_core::{AttestationTag, SerializationContext};

/// Build a record from a tag and an arbitrary payload.
///
/// No size limit is applied, so this can build records the decoder rejects.
pub fn record(tag: AttestationTag, payload: &[u8]) -> Vec<u8> {
    let mut ctx = SerializationContext::new();
    ctx.write_bytes(tag.as_bytes());
    ctx.write_varbytes(payload);
    ctx.into_bytes()
}

/// Build a record header that declares `len` payload bytes but carries none.
pub fn header_only(tag: AttestationTag, len: u64) -> Vec<u8> {
    let mut ctx = SerializationContext::new();
    ctx.write_bytes(tag.as_bytes());
    ctx.write_varuint(len);
    ctx.into_bytes()
}

/// Build a Bitcoin record, optionally followed by extra bytes inside the payload.
pub fn bitcoin_record(height: u64, trailing: &[u8]) -> Vec<u8> {
    let mut body = SerializationContext::new();
    body.write_varuint(height);
    body.write_bytes(trailing);
    record(AttestationTag::BITCOIN, body.as_bytes())
}

/// Build a pending record with raw URI bytes of any length or encoding.
pub fn pending_record(uri: &[u8]) -> Vec<u8> {
    let mut body = SerializationContext::new();
    body.write_varbytes(uri);
    record(AttestationTag::PENDING, body.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcoin_record_layout() {
        assert_eq!(
            bitcoin_record(1000, &[]),
            hex::decode("0588960d73d7190102e807").unwrap()
        );
        assert_eq!(
            bitcoin_record(1000, &[0x00]),
            hex::decode("0588960d73d7190103e80700").unwrap()
        );
    }

    #[test]
    fn test_header_only_layout() {
        assert_eq!(
            header_only(AttestationTag::from_bytes([0xff; 8]), 3),
            hex::decode("ffffffffffffffff03").unwrap()
        );
    }

    #[test]
    fn test_pending_record_layout() {
        assert_eq!(
            pending_record(b"ab"),
            hex::decode("83dfe30d2ef90c8e03026162").unwrap()
        );
    }
}

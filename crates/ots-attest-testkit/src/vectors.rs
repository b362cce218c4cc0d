//! Golden test vectors for deterministic verification.
//!
//! Each vector is a complete attestation record in hex together with the
//! outcome every decoder must produce for it.

use ots_attest_core::{
    parse_attestation, Attestation, AttestationTag, BitcoinAttestation, DecodeError,
    DeserializationContext, PendingAttestation, UnknownAttestation, MAX_PAYLOAD_SIZE,
};

/// What decoding a golden vector must yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A pending attestation with this URI.
    Pending(&'static str),
    /// A Bitcoin attestation at this height.
    Bitcoin(u64),
    /// An unknown attestation with this tag (hex) and raw payload.
    Unknown {
        tag: &'static str,
        payload: &'static [u8],
    },
    /// Decoding fails with exactly this error.
    Error(DecodeError),
}

impl Expected {
    /// The attestation value this outcome describes, if it is a success.
    pub fn attestation(&self) -> Option<Attestation> {
        match self {
            Self::Pending(uri) => Some(PendingAttestation::new(*uri).into()),
            Self::Bitcoin(height) => Some(BitcoinAttestation::new(*height).into()),
            Self::Unknown { tag, payload } => {
                let tag = AttestationTag::from_hex(tag).ok()?;
                Some(UnknownAttestation::new(tag, *payload).into())
            }
            Self::Error(_) => None,
        }
    }
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The full record, hex encoded.
    pub record_hex: &'static str,
    /// Expected decoding outcome.
    pub expected: Expected,
}

impl GoldenVector {
    /// The record bytes.
    pub fn record(&self) -> Vec<u8> {
        // Vector hex is static and checked by the tests below.
        hex::decode(self.record_hex).unwrap_or_default()
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "bitcoin height 1000",
            record_hex: "0588960d73d7190102e807",
            expected: Expected::Bitcoin(1000),
        },
        GoldenVector {
            name: "bitcoin height 0",
            record_hex: "0588960d73d719010100",
            expected: Expected::Bitcoin(0),
        },
        GoldenVector {
            name: "bitcoin height 358391",
            record_hex: "0588960d73d7190103f7ef15",
            expected: Expected::Bitcoin(358391),
        },
        GoldenVector {
            name: "bitcoin height u64::MAX",
            record_hex: "0588960d73d719010affffffffffffffffff01",
            expected: Expected::Bitcoin(u64::MAX),
        },
        GoldenVector {
            name: "pending alice calendar",
            record_hex: "83dfe30d2ef90c8e2e2d68747470733a2f2f616c6963652e6274632e63616c656e6461722e6f70656e74696d657374616d70732e6f7267",
            expected: Expected::Pending("https://alice.btc.calendar.opentimestamps.org"),
        },
        GoldenVector {
            name: "pending bob calendar",
            record_hex: "83dfe30d2ef90c8e2c2b68747470733a2f2f626f622e6274632e63616c656e6461722e6f70656e74696d657374616d70732e6f7267",
            expected: Expected::Pending("https://bob.btc.calendar.opentimestamps.org"),
        },
        GoldenVector {
            name: "pending empty uri",
            record_hex: "83dfe30d2ef90c8e0100",
            expected: Expected::Pending(""),
        },
        GoldenVector {
            name: "unknown tag with abc payload",
            record_hex: "ffffffffffffffff03616263",
            expected: Expected::Unknown {
                tag: "ffffffffffffffff",
                payload: b"abc",
            },
        },
        GoldenVector {
            name: "unknown tag with empty payload",
            record_hex: "010203040506070800",
            expected: Expected::Unknown {
                tag: "0102030405060708",
                payload: b"",
            },
        },
        GoldenVector {
            name: "bitcoin payload with trailing byte",
            record_hex: "0588960d73d7190103e80700",
            expected: Expected::Error(DecodeError::TrailingPayloadBytes { remaining: 1 }),
        },
        GoldenVector {
            name: "payload length over limit",
            record_hex: "0588960d73d719018140",
            expected: Expected::Error(DecodeError::PayloadTooLarge {
                len: MAX_PAYLOAD_SIZE as u64 + 1,
                max: MAX_PAYLOAD_SIZE,
            }),
        },
        GoldenVector {
            name: "truncated tag",
            record_hex: "0588960d",
            expected: Expected::Error(DecodeError::TruncatedInput {
                needed: 8,
                remaining: 4,
            }),
        },
        GoldenVector {
            name: "truncated payload",
            record_hex: "0588960d73d7190102e8",
            expected: Expected::Error(DecodeError::TruncatedInput {
                needed: 2,
                remaining: 1,
            }),
        },
        GoldenVector {
            name: "bitcoin height overflows u64",
            record_hex: "0588960d73d719010affffffffffffffffff02",
            expected: Expected::Error(DecodeError::MalformedVarint("value overflows u64")),
        },
    ]
}

/// Decode every golden vector with the standard dispatcher.
///
/// Returns `(name, matches)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let bytes = v.record();
            let mut ctx = DeserializationContext::new(&bytes);
            let matches = match (parse_attestation(&mut ctx), &v.expected) {
                (Err(got), Expected::Error(want)) => &got == want,
                (Ok(got), expected) => expected.attestation().as_ref() == Some(&got),
                (Err(_), _) => false,
            };
            (v.name.to_string(), matches)
        })
        .collect()
}

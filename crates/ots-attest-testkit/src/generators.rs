//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ots_attest_core::{
    Attestation, AttestationTag, BitcoinAttestation, PendingAttestation, TagRegistry,
    UnknownAttestation, MAX_PAYLOAD_SIZE, MAX_URI_LENGTH,
};

/// Generate any 8-byte tag.
pub fn tag() -> impl Strategy<Value = AttestationTag> {
    any::<[u8; 8]>().prop_map(AttestationTag::from_bytes)
}

/// Generate a tag the standard registry does not recognize.
pub fn unknown_tag() -> impl Strategy<Value = AttestationTag> {
    tag().prop_filter("tag is registered", |t| {
        TagRegistry::standard().lookup(t).is_none()
    })
}

/// Generate a block height, biased towards the varint width boundaries.
pub fn height() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(0u64),
        Just(u64::MAX),
        (0u32..64).prop_map(|shift| 1u64 << shift),
        0u64..1_000_000,
        any::<u64>(),
    ]
}

/// Generate a calendar URI no longer than `max_len` bytes.
pub fn calendar_uri(max_len: usize) -> impl Strategy<Value = String> {
    "https://[a-z]{1,20}(\\.[a-z]{1,12}){0,4}(/[a-z0-9]{0,16})?"
        .prop_map(move |mut uri: String| {
            uri.truncate(max_len);
            uri
        })
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a pending attestation with a URI of at most `MAX_URI_LENGTH` bytes.
pub fn pending() -> impl Strategy<Value = PendingAttestation> {
    prop_oneof![
        calendar_uri(MAX_URI_LENGTH).prop_map(PendingAttestation::new),
        (0usize..=MAX_URI_LENGTH).prop_map(|len| PendingAttestation::new("u".repeat(len))),
    ]
}

/// Generate a Bitcoin attestation.
pub fn bitcoin() -> impl Strategy<Value = BitcoinAttestation> {
    height().prop_map(BitcoinAttestation::new)
}

/// Generate an unknown attestation whose payload fits the record limit.
pub fn unknown() -> impl Strategy<Value = UnknownAttestation> {
    (unknown_tag(), payload(MAX_PAYLOAD_SIZE))
        .prop_map(|(tag, payload)| UnknownAttestation::new(tag, payload))
}

/// Generate any encodable attestation.
pub fn attestation() -> impl Strategy<Value = Attestation> {
    prop_oneof![
        pending().prop_map(Attestation::Pending),
        bitcoin().prop_map(Attestation::Bitcoin),
        unknown().prop_map(Attestation::Unknown),
    ]
}

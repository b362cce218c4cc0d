//! # OTS Attest
//!
//! The unified API for reading and writing OpenTimestamps attestation
//! records, the leaves of a timestamp proof that say how it can be checked.
//!
//! ## Overview
//!
//! - **Pending**: the timestamp was submitted to a calendar; ask it later
//! - **Bitcoin**: the commitment is in a specific Bitcoin block
//! - **Unknown**: any other tag, kept verbatim so proofs survive a round trip
//!
//! Decoding does not verify anything. It turns bytes into typed values,
//! bounding every length before allocating.
//!
//! ## Usage
//!
//! ```rust
//! use ots_attest::{AttestationDecoder, DecodeConfig};
//!
//! let decoder = AttestationDecoder::new(DecodeConfig::default());
//! let attestation = decoder.decode_hex("0588960d73d7190102e807").unwrap();
//! assert_eq!(attestation.to_string(), "VERIFY BitcoinAttestation(height=1000)");
//! ```
//!
//! ## Re-exports
//!
//! - `ots_attest::core` - Wire primitives, variants, and the dispatcher

pub mod decoder;
pub mod error;

pub use ots_attest_core as core;

pub use decoder::AttestationDecoder;
pub use error::{AttestError, Result};

pub use ots_attest_core::{
    Attestation, AttestationKind, AttestationTag, BitcoinAttestation, DecodeConfig, DecodeError,
    EncodeError, PendingAttestation, TagRegistry, UnknownAttestation, UriPolicy,
};

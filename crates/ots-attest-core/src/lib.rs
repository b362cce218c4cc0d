//! # OTS Attest Core
//!
//! Pure primitives for reading and writing the attestation records found at
//! the leaves of OpenTimestamps proofs.
//!
//! This crate contains no I/O. Decoding is a deterministic function of the
//! input bytes, with every length bounded before it is allocated.
//!
//! ## Key Types
//!
//! - [`Attestation`] - A decoded record: pending, Bitcoin, or unknown
//! - [`AttestationTag`] - The 8-byte discriminant of a record
//! - [`TagRegistry`] - Ordered set of kinds the dispatcher recognizes
//! - [`DeserializationContext`] - Bounded cursor over proof bytes
//!
//! ## Decoding
//!
//! ```rust
//! use ots_attest_core::{parse_attestation, DeserializationContext};
//!
//! let bytes = [0x05, 0x88, 0x96, 0x0d, 0x73, 0xd7, 0x19, 0x01, 0x02, 0xe8, 0x07];
//! let mut ctx = DeserializationContext::new(&bytes);
//! let attestation = parse_attestation(&mut ctx).unwrap();
//! assert_eq!(attestation.to_string(), "VERIFY BitcoinAttestation(height=1000)");
//! ```

pub mod attestation;
pub mod config;
pub mod context;
pub mod error;
pub mod registry;
pub mod types;

pub use attestation::{
    Attestation, BitcoinAttestation, PendingAttestation, UnknownAttestation, MAX_PAYLOAD_SIZE,
    MAX_URI_LENGTH,
};
pub use config::{DecodeConfig, UriPolicy};
pub use context::{DeserializationContext, SerializationContext};
pub use error::{DecodeError, EncodeError};
pub use registry::{parse_attestation, parse_attestation_with, AttestationKind, TagRegistry};
pub use types::{AttestationTag, TAG_SIZE};

//! # OTS Attest Testkit
//!
//! Testing utilities for attestation decoding.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known records with expected outcomes for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Record builders, including malformed records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ots_attest_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "{}", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ots_attest_testkit::generators::attestation;
//!
//! proptest! {
//!     #[test]
//!     fn encodes(att in attestation()) {
//!         prop_assert!(att.to_bytes().is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{bitcoin_record, header_only, pending_record, record};
pub use vectors::{all_vectors, verify_all_vectors, Expected, GoldenVector};

//! # Attest Registry Testkit
//!
//! Testing utilities for the attestation registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Derivation vectors**: Known derivation inputs with pinnable expected UIDs
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs and hook doubles for setting up test scenarios
//!
//! ## Derivation Vectors
//!
//! Vectors ensure deterministic UID derivation across implementations:
//!
//! ```rust
//! use attest_registry_testkit::vectors::{schema_vectors, schema_uid_from_vector};
//!
//! for vector in schema_vectors() {
//!     let uid = schema_uid_from_vector(&vector);
//!     println!("{}: {}", vector.name, uid.to_hex());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use attest_registry_testkit::generators::{AttestationParams, attestation_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn generation_is_deterministic(params: AttestationParams) {
//!         let a = attestation_from_params(&params);
//!         let b = attestation_from_params(&params);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use attest_registry_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed(7);
//! let schema = attest_registry_core::SchemaUid::derive("bool verified", None);
//! let attestation = fixture.make_attestation(schema, b"\x01");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    multi_party_fixtures, seeded_address, CountingHooks, ScriptedHooks, TestFixture,
};
pub use generators::{attestation_from_params, AttestationParams};
pub use vectors::{
    resolver_vectors, schema_vectors, verify_all_vectors, ResolverVector, SchemaVector,
    VectorReport,
};

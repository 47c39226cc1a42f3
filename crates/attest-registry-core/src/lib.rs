//! # Attest Registry Core
//!
//! Pure primitives for the attestation registry: addresses, UIDs, records,
//! and events.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over identity-defining data.
//!
//! ## Key Types
//!
//! - [`Address`] - A 32-byte principal or contract reference
//! - [`SchemaUid`] - Deterministic identifier derived from (schema, validator)
//! - [`ResolverUid`] - Deterministic identifier derived from (resolver, owner)
//! - [`SchemaRecord`] / [`ResolverRecord`] - The two registry record kinds
//! - [`AttestationRecord`] / [`ModuleRecord`] - Externally-owned payloads
//!
//! ## UID Derivation
//!
//! UIDs are Blake3 hashes over a domain-separated, length-framed encoding of
//! a record's identity fields. Two independent callers submitting
//! bit-identical records always derive the same UID.

pub mod error;
pub mod event;
pub mod record;
pub mod types;

pub use error::CoreError;
pub use event::RegistryEvent;
pub use record::{AttestationRecord, ModuleRecord, ResolverRecord, SchemaRecord};
pub use types::{Address, ResolverUid, SchemaUid};

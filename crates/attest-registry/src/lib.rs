//! # Attest Registry
//!
//! The unified API for the attestation registry: typed schemas, pluggable
//! resolvers, deterministic UIDs, and owner-gated mutation.
//!
//! ## Overview
//!
//! The registry stores two kinds of permanent, append-only records:
//!
//! - **Schemas**: opaque schema text plus an optional content validator,
//!   identified by a UID derived from exactly those fields.
//! - **Resolvers**: pluggable callback logic, identified by a UID derived
//!   from (resolver address, owner), where only the owner may later swap the
//!   active resolver reference.
//!
//! ## Key Concepts
//!
//! - **Derived identity**: UIDs are computed, never assigned. Two callers
//!   submitting bit-identical records race for one slot; the loser fails
//!   with an "already exists" error instead of overwriting.
//! - **Permanent records**: registry entries are never deleted. The only
//!   mutation is the owner-gated resolver swap.
//! - **Events**: each mutation emits a fire-and-forget [`RegistryEvent`]
//!   for external indexers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attest_registry::{Registry, Address, MemoryStore};
//!
//! async fn example() {
//!     let registry = Registry::new(MemoryStore::new());
//!     let caller = Address::random();
//!
//!     let uid = registry
//!         .register_schema(&caller, "bool verified", None)
//!         .await
//!         .unwrap();
//!
//!     let record = registry.get_schema(&uid).await.unwrap().unwrap();
//!     assert_eq!(record.schema, "bool verified");
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `attest_registry::core` - Core primitives (Address, UIDs, records)
//! - `attest_registry::store` - Storage abstraction, SQLite and memory
//! - `attest_registry::resolver` - The resolver callback engine

pub mod error;
pub mod registry;

// Re-export component crates
pub use attest_registry_core as core;
pub use attest_registry_resolver as resolver;
pub use attest_registry_store as store;

// Re-export main types for convenience
pub use error::{RegistryError, Result};
pub use registry::Registry;

// Re-export commonly used component types
pub use attest_registry_core::{
    Address, AttestationRecord, ModuleRecord, RegistryEvent, ResolverRecord, ResolverUid,
    SchemaRecord, SchemaUid,
};
pub use attest_registry_resolver::{InterfaceId, ResolverEngine, ResolverHooks};
pub use attest_registry_store::{MemoryStore, RegistryStore, SqliteStore};

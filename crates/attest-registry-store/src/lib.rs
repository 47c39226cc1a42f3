//! # Attest Registry Store
//!
//! Storage abstraction for the attestation registry. Provides a trait-based
//! interface for schema and resolver record persistence with SQLite and
//! in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts record storage behind the [`RegistryStore`]
//! trait, keeping the registry storage-agnostic. The primary implementation
//! is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`RegistryStore`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`InsertOutcome`] - Result of a create-once insertion
//!
//! ## Design Notes
//!
//! - **Create-once inserts**: Inserting into an occupied UID slot returns
//!   `AlreadyExists` as an outcome, never overwrites.
//! - **Explicit presence**: Lookups return `Option`; absence is representable
//!   without a reserved-zero sentinel.
//! - **Authorization lives above**: `swap_resolver` performs the raw update;
//!   the owner check belongs to the registry facade.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{InsertOutcome, RegistryStore};

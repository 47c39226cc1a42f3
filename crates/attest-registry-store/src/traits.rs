//! Store trait: the abstract interface for registry record persistence.
//!
//! This trait keeps the registry storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use attest_registry_core::{Address, ResolverRecord, ResolverUid, SchemaRecord, SchemaUid};

use crate::error::Result;

/// Result of a create-once insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was inserted into an empty slot.
    Inserted,
    /// The UID slot was already occupied. The existing record is untouched;
    /// callers surface this as their "already exists" failure.
    AlreadyExists,
}

/// The store trait: async interface for registry record persistence.
///
/// # Design Notes
///
/// - **Create-once inserts**: registration races are resolved by whichever
///   call finalizes first; the loser observes `AlreadyExists` and nothing is
///   overwritten.
/// - **Explicit presence**: a record exists iff its UID key is present, so
///   lookups return `Option` and no reserved-zero sentinel is needed.
/// - **No authorization**: `swap_resolver` is the raw storage update; the
///   owner-identity check happens in the registry facade before calling it.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Schema Records
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a schema record at its UID, if the slot is empty.
    async fn insert_schema(&self, uid: &SchemaUid, record: &SchemaRecord)
        -> Result<InsertOutcome>;

    /// Look up a schema record. `None` means unregistered, never an error.
    async fn get_schema(&self, uid: &SchemaUid) -> Result<Option<SchemaRecord>>;

    /// List all registered schema UIDs.
    async fn list_schemas(&self) -> Result<Vec<SchemaUid>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Resolver Records
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a resolver record at its UID, if the slot is empty.
    async fn insert_resolver(
        &self,
        uid: &ResolverUid,
        record: &ResolverRecord,
    ) -> Result<InsertOutcome>;

    /// Look up a resolver record. `None` means unregistered, never an error.
    async fn get_resolver(&self, uid: &ResolverUid) -> Result<Option<ResolverRecord>>;

    /// Replace the resolver reference in place, leaving the owner untouched.
    ///
    /// Fails with `NotFound` if the slot is empty.
    async fn swap_resolver(&self, uid: &ResolverUid, new_resolver: &Address) -> Result<()>;

    /// List resolver UIDs registered by the given owner.
    async fn list_resolvers_by_owner(&self, owner: &Address) -> Result<Vec<ResolverUid>>;
}

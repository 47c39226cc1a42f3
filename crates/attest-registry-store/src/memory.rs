//! In-memory implementation of the RegistryStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite but
//! keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use attest_registry_core::{Address, ResolverRecord, ResolverUid, SchemaRecord, SchemaUid};

use crate::error::{Result, StoreError};
use crate::traits::{InsertOutcome, RegistryStore};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock; the
/// write lock makes each check-then-insert atomic, so racing registrations
/// resolve to first-writer-wins.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Schema records indexed by UID.
    schemas: HashMap<SchemaUid, SchemaRecord>,

    /// Resolver records indexed by UID.
    resolvers: HashMap<ResolverUid, ResolverRecord>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                schemas: HashMap::new(),
                resolvers: HashMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn insert_schema(
        &self,
        uid: &SchemaUid,
        record: &SchemaRecord,
    ) -> Result<InsertOutcome> {
        let mut inner = self.inner.write().unwrap();

        if inner.schemas.contains_key(uid) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        inner.schemas.insert(*uid, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn get_schema(&self, uid: &SchemaUid) -> Result<Option<SchemaRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.schemas.get(uid).cloned())
    }

    async fn list_schemas(&self) -> Result<Vec<SchemaUid>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.schemas.keys().copied().collect())
    }

    async fn insert_resolver(
        &self,
        uid: &ResolverUid,
        record: &ResolverRecord,
    ) -> Result<InsertOutcome> {
        let mut inner = self.inner.write().unwrap();

        if inner.resolvers.contains_key(uid) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        inner.resolvers.insert(*uid, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn get_resolver(&self, uid: &ResolverUid) -> Result<Option<ResolverRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.resolvers.get(uid).cloned())
    }

    async fn swap_resolver(&self, uid: &ResolverUid, new_resolver: &Address) -> Result<()> {
        let mut inner = self.inner.write().unwrap();

        match inner.resolvers.get_mut(uid) {
            Some(record) => {
                record.resolver = *new_resolver;
                Ok(())
            }
            None => Err(StoreError::NotFound(uid.to_hex())),
        }
    }

    async fn list_resolvers_by_owner(&self, owner: &Address) -> Result<Vec<ResolverUid>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .resolvers
            .iter()
            .filter(|(_, r)| &r.owner == owner)
            .map(|(uid, _)| *uid)
            .collect())
    }
}

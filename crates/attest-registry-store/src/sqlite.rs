//! SQLite implementation of the RegistryStore trait.
//!
//! This is the primary storage backend for the attestation registry. It uses
//! rusqlite with bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use attest_registry_core::{Address, ResolverRecord, ResolverUid, SchemaRecord, SchemaUid};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{InsertOutcome, RegistryStore};

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking to
/// avoid blocking the async runtime.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path.as_ref())?;
        migration::migrate(&mut conn)?;
        debug!(path = %path.as_ref().display(), "opened registry database");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Map a poisoned-mutex failure onto a database error.
fn lock_poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
        Some(format!("mutex poisoned: {}", e)),
    ))
}

/// Map a spawn_blocking join failure onto a database error.
fn join_failed(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

/// Read a 32-byte blob column.
fn blob32(bytes: Vec<u8>, idx: usize, name: &str) -> rusqlite::Result<[u8; 32]> {
    bytes.try_into().map_err(|_| {
        rusqlite::Error::InvalidColumnType(idx, name.into(), rusqlite::types::Type::Blob)
    })
}

/// Helper to convert a row to a SchemaRecord.
fn row_to_schema(row: &rusqlite::Row<'_>) -> rusqlite::Result<SchemaRecord> {
    let schema: String = row.get("schema")?;
    let validator_bytes: Option<Vec<u8>> = row.get("validator")?;
    let registered_at: i64 = row.get("registered_at")?;

    let validator = match validator_bytes {
        Some(bytes) => Some(Address::from_bytes(blob32(bytes, 1, "validator")?)),
        None => None,
    };

    Ok(SchemaRecord {
        schema,
        validator,
        registered_at,
    })
}

/// Helper to convert a row to a ResolverRecord.
fn row_to_resolver(row: &rusqlite::Row<'_>) -> rusqlite::Result<ResolverRecord> {
    let resolver_bytes: Vec<u8> = row.get("resolver")?;
    let owner_bytes: Vec<u8> = row.get("owner")?;

    Ok(ResolverRecord {
        resolver: Address::from_bytes(blob32(resolver_bytes, 0, "resolver")?),
        owner: Address::from_bytes(blob32(owner_bytes, 1, "owner")?),
    })
}

#[async_trait]
impl RegistryStore for SqliteStore {
    async fn insert_schema(
        &self,
        uid: &SchemaUid,
        record: &SchemaRecord,
    ) -> Result<InsertOutcome> {
        let uid = *uid;
        let record = record.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            // ON CONFLICT DO NOTHING makes the create-once check and the
            // insert a single atomic statement.
            let changed = conn.execute(
                "INSERT INTO schemas (uid, schema, validator, registered_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(uid) DO NOTHING",
                params![
                    uid.as_bytes().as_slice(),
                    record.schema,
                    record.validator.as_ref().map(|a| a.as_bytes().as_slice()),
                    record.registered_at,
                ],
            )?;

            if changed == 0 {
                Ok(InsertOutcome::AlreadyExists)
            } else {
                debug!(%uid, "inserted schema record");
                Ok(InsertOutcome::Inserted)
            }
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_schema(&self, uid: &SchemaUid) -> Result<Option<SchemaRecord>> {
        let uid = *uid;
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            conn.query_row(
                "SELECT schema, validator, registered_at FROM schemas WHERE uid = ?1",
                params![uid.as_bytes().as_slice()],
                row_to_schema,
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
        .map_err(join_failed)?
    }

    async fn list_schemas(&self) -> Result<Vec<SchemaUid>> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let mut stmt = conn.prepare("SELECT uid FROM schemas")?;
            let uids = stmt
                .query_map([], |row| {
                    let bytes: Vec<u8> = row.get(0)?;
                    Ok(SchemaUid::from_bytes(blob32(bytes, 0, "uid")?))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(uids)
        })
        .await
        .map_err(join_failed)?
    }

    async fn insert_resolver(
        &self,
        uid: &ResolverUid,
        record: &ResolverRecord,
    ) -> Result<InsertOutcome> {
        let uid = *uid;
        let record = record.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let changed = conn.execute(
                "INSERT INTO resolvers (uid, resolver, owner)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(uid) DO NOTHING",
                params![
                    uid.as_bytes().as_slice(),
                    record.resolver.as_bytes().as_slice(),
                    record.owner.as_bytes().as_slice(),
                ],
            )?;

            if changed == 0 {
                Ok(InsertOutcome::AlreadyExists)
            } else {
                debug!(%uid, "inserted resolver record");
                Ok(InsertOutcome::Inserted)
            }
        })
        .await
        .map_err(join_failed)?
    }

    async fn get_resolver(&self, uid: &ResolverUid) -> Result<Option<ResolverRecord>> {
        let uid = *uid;
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            conn.query_row(
                "SELECT resolver, owner FROM resolvers WHERE uid = ?1",
                params![uid.as_bytes().as_slice()],
                row_to_resolver,
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
        .map_err(join_failed)?
    }

    async fn swap_resolver(&self, uid: &ResolverUid, new_resolver: &Address) -> Result<()> {
        let uid = *uid;
        let new_resolver = *new_resolver;
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let changed = conn.execute(
                "UPDATE resolvers SET resolver = ?2 WHERE uid = ?1",
                params![
                    uid.as_bytes().as_slice(),
                    new_resolver.as_bytes().as_slice(),
                ],
            )?;

            if changed == 0 {
                Err(StoreError::NotFound(uid.to_hex()))
            } else {
                debug!(%uid, "swapped resolver reference");
                Ok(())
            }
        })
        .await
        .map_err(join_failed)?
    }

    async fn list_resolvers_by_owner(&self, owner: &Address) -> Result<Vec<ResolverUid>> {
        let owner = *owner;
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let mut stmt = conn.prepare("SELECT uid FROM resolvers WHERE owner = ?1")?;
            let uids = stmt
                .query_map(params![owner.as_bytes().as_slice()], |row| {
                    let bytes: Vec<u8> = row.get(0)?;
                    Ok(ResolverUid::from_bytes(blob32(bytes, 0, "uid")?))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(uids)
        })
        .await
        .map_err(join_failed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_schema_roundtrip() {
        let store = SqliteStore::open_memory().unwrap();
        let validator = Address::random();
        let record = SchemaRecord::new("uint256 balance", Some(validator), 1_736_870_400_000);
        let uid = record.uid();

        let outcome = store.insert_schema(&uid, &record).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let retrieved = store.get_schema(&uid).await.unwrap().unwrap();
        assert_eq!(retrieved, record);
    }

    #[tokio::test]
    async fn test_sqlite_schema_create_once() {
        let store = SqliteStore::open_memory().unwrap();
        let record = SchemaRecord::new("bool verified", None, 1_736_870_400_000);
        let uid = record.uid();

        assert_eq!(
            store.insert_schema(&uid, &record).await.unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store.insert_schema(&uid, &record).await.unwrap(),
            InsertOutcome::AlreadyExists
        );

        // The original record is untouched.
        let retrieved = store.get_schema(&uid).await.unwrap().unwrap();
        assert_eq!(retrieved.registered_at, 1_736_870_400_000);
    }

    #[tokio::test]
    async fn test_sqlite_null_validator_roundtrip() {
        let store = SqliteStore::open_memory().unwrap();
        let record = SchemaRecord::new("bool verified", None, 1_736_870_400_000);
        let uid = record.uid();

        store.insert_schema(&uid, &record).await.unwrap();
        let retrieved = store.get_schema(&uid).await.unwrap().unwrap();
        assert!(retrieved.validator.is_none());
    }

    #[tokio::test]
    async fn test_sqlite_resolver_swap_preserves_owner() {
        let store = SqliteStore::open_memory().unwrap();
        let owner = Address::random();
        let record = ResolverRecord::new(Address::random(), owner);
        let uid = record.uid();

        store.insert_resolver(&uid, &record).await.unwrap();

        let replacement = Address::random();
        store.swap_resolver(&uid, &replacement).await.unwrap();

        let retrieved = store.get_resolver(&uid).await.unwrap().unwrap();
        assert_eq!(retrieved.resolver, replacement);
        assert_eq!(retrieved.owner, owner);
    }

    #[tokio::test]
    async fn test_sqlite_swap_missing_fails() {
        let store = SqliteStore::open_memory().unwrap();
        let uid = ResolverUid::from_bytes([0x42; 32]);
        let result = store.swap_resolver(&uid, &Address::random()).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_sqlite_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");

        let record = SchemaRecord::new("bytes32 hash", None, 1_736_870_400_000);
        let uid = record.uid();

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert_schema(&uid, &record).await.unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let retrieved = store.get_schema(&uid).await.unwrap().unwrap();
        assert_eq!(retrieved, record);
    }

    #[tokio::test]
    async fn test_sqlite_list_schemas() {
        let store = SqliteStore::open_memory().unwrap();

        let r1 = SchemaRecord::new("bool a", None, 1);
        let r2 = SchemaRecord::new("bool b", None, 2);
        store.insert_schema(&r1.uid(), &r1).await.unwrap();
        store.insert_schema(&r2.uid(), &r2).await.unwrap();

        let uids = store.list_schemas().await.unwrap();
        assert_eq!(uids.len(), 2);
        assert!(uids.contains(&r1.uid()));
        assert!(uids.contains(&r2.uid()));
    }
}

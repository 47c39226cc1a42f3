//! The Registry: unified API over the schema/resolver store.
//!
//! The registry owns UID derivation, create-once insertion, the explicit
//! owner check before resolver mutation, and event emission. Storage itself
//! is behind the [`RegistryStore`] trait.

use std::sync::{Arc, Mutex};

use tracing::info;

use attest_registry_core::{
    Address, RegistryEvent, ResolverRecord, ResolverUid, SchemaRecord, SchemaUid,
};
use attest_registry_store::{InsertOutcome, RegistryStore};

use crate::error::{RegistryError, Result};

/// The main registry struct.
///
/// Provides a unified API for:
/// - Registering schemas and resolvers
/// - Owner-gated resolver updates
/// - Lookups and enumeration
/// - Draining emitted events
pub struct Registry<S: RegistryStore> {
    /// The storage backend.
    store: Arc<S>,

    /// Events emitted since the last drain. Fire-and-forget; nothing here
    /// is consumed internally.
    events: Mutex<Vec<RegistryEvent>>,
}

impl<S: RegistryStore> Registry<S> {
    /// Create a new registry over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Schema Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a schema.
    ///
    /// The UID is derived from (schema text, validator); registering an
    /// identical pair twice fails with `SchemaExists`. A `None` validator
    /// means no schema-level content validation.
    pub async fn register_schema(
        &self,
        caller: &Address,
        schema: &str,
        validator: Option<Address>,
    ) -> Result<SchemaUid> {
        let uid = SchemaUid::derive(schema, validator.as_ref());
        let record = SchemaRecord::new(schema, validator, now_millis());

        match self.store.insert_schema(&uid, &record).await? {
            InsertOutcome::Inserted => {
                info!(%uid, registrant = %caller, "schema registered");
                self.emit(RegistryEvent::SchemaRegistered {
                    uid,
                    registrant: *caller,
                });
                Ok(uid)
            }
            InsertOutcome::AlreadyExists => Err(RegistryError::SchemaExists(uid)),
        }
    }

    /// Look up a schema record. Absence is `None`, never an error.
    pub async fn get_schema(&self, uid: &SchemaUid) -> Result<Option<SchemaRecord>> {
        Ok(self.store.get_schema(uid).await?)
    }

    /// List all registered schema UIDs.
    pub async fn list_schemas(&self) -> Result<Vec<SchemaUid>> {
        Ok(self.store.list_schemas().await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolver Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a resolver.
    ///
    /// The caller becomes the entry's owner, and the owner participates in
    /// UID derivation: the same resolver address registered by two different
    /// callers produces two distinct, independently-owned entries.
    pub async fn register_resolver(
        &self,
        caller: &Address,
        resolver: Address,
    ) -> Result<ResolverUid> {
        if resolver.is_zero() {
            return Err(RegistryError::InvalidResolver(
                "resolver reference is the zero address".into(),
            ));
        }

        let uid = ResolverUid::derive(&resolver, caller);
        let record = ResolverRecord::new(resolver, *caller);

        match self.store.insert_resolver(&uid, &record).await? {
            InsertOutcome::Inserted => {
                info!(%uid, registrant = %caller, "resolver registered");
                self.emit(RegistryEvent::SchemaResolverRegistered {
                    uid,
                    registrant: *caller,
                });
                Ok(uid)
            }
            InsertOutcome::AlreadyExists => Err(RegistryError::ResolverExists(uid)),
        }
    }

    /// Replace the active resolver reference for an entry.
    ///
    /// Only the stored owner may do this; the owner field itself never
    /// changes. An unregistered UID has no owner, so it denies like any
    /// other non-owner call.
    pub async fn set_resolver(
        &self,
        caller: &Address,
        uid: &ResolverUid,
        new_resolver: Address,
    ) -> Result<()> {
        if new_resolver.is_zero() {
            return Err(RegistryError::InvalidResolver(
                "resolver reference is the zero address".into(),
            ));
        }

        let record = self.store.get_resolver(uid).await?;
        match record {
            Some(record) if &record.owner == caller => {
                self.store.swap_resolver(uid, &new_resolver).await?;
                info!(%uid, resolver = %new_resolver, "resolver reference updated");
                self.emit(RegistryEvent::NewSchemaResolver {
                    uid: *uid,
                    resolver: new_resolver,
                });
                Ok(())
            }
            _ => Err(RegistryError::AccessDenied {
                uid: *uid,
                caller: *caller,
            }),
        }
    }

    /// Look up a resolver record. Absence is `None`, never an error.
    pub async fn get_resolver(&self, uid: &ResolverUid) -> Result<Option<ResolverRecord>> {
        Ok(self.store.get_resolver(uid).await?)
    }

    /// List resolver UIDs owned by the given principal.
    pub async fn list_resolvers_by_owner(&self, owner: &Address) -> Result<Vec<ResolverUid>> {
        Ok(self.store.list_resolvers_by_owner(owner).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Drain all events emitted since the last drain.
    pub fn drain_events(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events.lock().unwrap())
    }

    fn emit(&self, event: RegistryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

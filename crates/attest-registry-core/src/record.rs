//! Registry records and externally-owned payloads.
//!
//! [`SchemaRecord`] and [`ResolverRecord`] are the two record kinds the
//! registry stores. [`AttestationRecord`] and [`ModuleRecord`] are owned by
//! the external attestation registry and only pass through resolver hooks by
//! value; this crate never mutates their storage.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Address, ResolverUid, SchemaUid};

/// A registered schema.
///
/// Immutable once registered: the UID is a pure function of
/// (schema, validator), so a second registration of the same pair collides
/// into "already exists" rather than overwriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    /// The opaque schema text. Content semantics are not interpreted here.
    pub schema: String,

    /// Optional schema-level content validator. `None` means no validation.
    pub validator: Option<Address>,

    /// When the schema was registered (Unix milliseconds). Informational;
    /// existence is tracked by map presence, not by this field.
    pub registered_at: i64,
}

impl SchemaRecord {
    /// Create a new schema record.
    pub fn new(schema: impl Into<String>, validator: Option<Address>, now: i64) -> Self {
        Self {
            schema: schema.into(),
            validator,
            registered_at: now,
        }
    }

    /// Derive the UID for this record's identity fields.
    pub fn uid(&self) -> SchemaUid {
        SchemaUid::derive(&self.schema, self.validator.as_ref())
    }
}

/// A registered resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverRecord {
    /// The active resolver reference. Never the zero address.
    pub resolver: Address,

    /// The principal that registered this entry. Fixed at creation; the only
    /// principal authorized to update `resolver`.
    pub owner: Address,
}

impl ResolverRecord {
    /// Create a new resolver record.
    pub fn new(resolver: Address, owner: Address) -> Self {
        Self { resolver, owner }
    }

    /// Derive the UID for this record's identity fields.
    pub fn uid(&self) -> ResolverUid {
        ResolverUid::derive(&self.resolver, &self.owner)
    }
}

/// An attestation, as handed to resolver hooks by the external registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationRecord {
    /// The schema this attestation claims against.
    pub schema: SchemaUid,

    /// Who made the attestation.
    pub attester: Address,

    /// Who the attestation is about.
    pub recipient: Address,

    /// When the attestation was made (Unix milliseconds).
    pub time: i64,

    /// When the attestation expires (0 = never).
    pub expiration: i64,

    /// Whether the attestation can be revoked.
    pub revocable: bool,

    /// Opaque payload bytes, interpreted per-schema by consumers.
    pub data: Bytes,
}

impl AttestationRecord {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

/// A module registration, as handed to resolver hooks by the external
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// The resolver entry this module is bound to.
    pub resolver: ResolverUid,

    /// The module implementation reference.
    pub implementation: Address,

    /// Who submitted the registration.
    pub sender: Address,

    /// Opaque module metadata.
    pub metadata: Bytes,
}

impl ModuleRecord {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

//! Error types for the registry facade.

use attest_registry_core::{Address, ResolverUid, SchemaUid};
use attest_registry_store::StoreError;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A schema with this identity is already registered.
    #[error("schema already exists: {0}")]
    SchemaExists(SchemaUid),

    /// A resolver with this identity is already registered.
    #[error("resolver already exists: {0}")]
    ResolverExists(ResolverUid),

    /// The zero address where a real resolver reference is required.
    #[error("invalid resolver: {0}")]
    InvalidResolver(String),

    /// Caller is not the owner of the resolver entry it tried to mutate.
    #[error("access denied: {caller} does not own resolver {uid}")]
    AccessDenied { uid: ResolverUid, caller: Address },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

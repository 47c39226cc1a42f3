//! Error types for the resolver engine.

use attest_registry_core::Address;
use thiserror::Error;

/// Errors that can occur during resolver dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// Caller is not the designated registry principal.
    #[error("access denied: caller {caller} is not the registry")]
    AccessDenied { caller: Address },

    /// A null reference where a real one is required (registry principal at
    /// construction, resolver address at registration).
    #[error("invalid resolver: {0}")]
    InvalidResolver(String),

    /// A batch item declared more value than remains in the running budget.
    #[error("insufficient value: item declared {declared}, {remaining} remaining")]
    InsufficientValue { declared: u64, remaining: u64 },

    /// Direct value transfer to a resolver that does not accept value.
    #[error("resolver is not payable")]
    NotPayable,

    /// The batch record and value slices differ in length.
    #[error("batch length mismatch: {records} records, {values} values")]
    BatchLengthMismatch { records: usize, values: usize },
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

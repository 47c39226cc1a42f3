//! Error types for the attest registry core.

use thiserror::Error;

/// Core errors that can occur when decoding externally-supplied payloads.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

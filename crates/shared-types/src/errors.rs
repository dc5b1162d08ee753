//! # Entity Errors

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors raised while constructing shared entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// A required registration field was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Canonical encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Hashing layer rejected the input.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Fingerprint is not a 64-character hex string
    #[error("Malformed fingerprint: {0}")]
    MalformedFingerprint(String),

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Key material was not valid hex
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Record could not be brought into canonical form
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

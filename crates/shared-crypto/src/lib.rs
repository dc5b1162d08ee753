//! # Shared Crypto - Fingerprints and Integrity Tags
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Content / metadata fingerprints, block digests |
//! | `integrity` | HMAC-SHA256 | Transaction integrity tags |
//!
//! ## Security Properties
//!
//! - **SHA-256**: deterministic, avalanche on single-bit input changes
//! - **Canonical records**: object keys are sorted before hashing, so two
//!   equal metadata maps always produce the same fingerprint
//! - **HMAC tags**: bind a record to the process holding the secret; they are
//!   not public-key signatures and provide no non-repudiation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod integrity;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{canonical_json, digest_bytes, digest_parts, digest_record, Fingerprint};
pub use integrity::IntegrityKey;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}

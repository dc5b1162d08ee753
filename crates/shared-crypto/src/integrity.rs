//! # HMAC-SHA256 Integrity Tags
//!
//! A process-wide secret binds each transaction record to the ledger instance
//! that produced it. Verification uses the constant-time comparison provided
//! by `hmac::Mac::verify_slice`.

use crate::CryptoError;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

/// Length of the integrity secret in bytes.
pub const INTEGRITY_KEY_LEN: usize = 32;

/// Secret key for integrity tags. Zeroized on drop; never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct IntegrityKey([u8; INTEGRITY_KEY_LEN]);

impl IntegrityKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; INTEGRITY_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode a 64-character hex secret.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;
        let bytes: [u8; INTEGRITY_KEY_LEN] =
            raw.as_slice()
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: INTEGRITY_KEY_LEN,
                    actual: raw.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Fresh random key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; INTEGRITY_KEY_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// True for the all-zero key, which must never be used in production.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Compute the hex-encoded tag over `payload`.
    pub fn tag(&self, payload: &[u8]) -> String {
        hex::encode(self.mac(payload).finalize().into_bytes())
    }

    /// Check a hex-encoded tag in constant time. Malformed hex is a mismatch.
    pub fn verify(&self, payload: &[u8], tag_hex: &str) -> bool {
        let Ok(expected) = hex::decode(tag_hex) else {
            return false;
        };
        self.mac(payload).verify_slice(&expected).is_ok()
    }

    fn mac(&self, payload: &[u8]) -> HmacSha256 {
        let mut mac =
            <HmacSha256 as Mac>::new_from_slice(&self.0).expect("HMAC can take key of any size");
        mac.update(payload);
        mac
    }
}

impl fmt::Debug for IntegrityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntegrityKey(<redacted>)")
    }
}

//! # SHA-256 Fingerprints
//!
//! Content fingerprints, metadata fingerprints and block digests all share one
//! representation: 64 lowercase hex characters of a SHA-256 digest.

use crate::CryptoError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of a hex-encoded SHA-256 digest.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Hex-encoded SHA-256 digest.
///
/// Only constructed by hashing or by [`Fingerprint::parse`], so every value
/// is exactly 64 lowercase hex characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parse a caller-supplied fingerprint. Upper-case hex is accepted and
    /// normalized.
    pub fn parse(input: &str) -> Result<Self, CryptoError> {
        let trimmed = input.trim();
        if trimmed.len() != FINGERPRINT_HEX_LEN {
            return Err(CryptoError::MalformedFingerprint(format!(
                "expected {} hex characters, got {}",
                FINGERPRINT_HEX_LEN,
                trimmed.len()
            )));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CryptoError::MalformedFingerprint(
                "non-hex character".to_string(),
            ));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// All-zero fingerprint, used as the genesis sentinel.
    pub fn zero() -> Self {
        Self("0".repeat(FINGERPRINT_HEX_LEN))
    }

    /// Hex string view.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of leading `'0'` hex characters.
    pub fn leading_zero_hex(&self) -> usize {
        self.0.bytes().take_while(|b| *b == b'0').count()
    }

    /// First 8 hex characters, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }

    fn from_digest(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}

/// Fingerprint raw bytes. An empty buffer is valid input.
pub fn digest_bytes(data: &[u8]) -> Fingerprint {
    Fingerprint::from_digest(&Sha256::digest(data))
}

/// Fingerprint the concatenation of several inputs without copying them.
pub fn digest_parts(parts: &[&[u8]]) -> Fingerprint {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    Fingerprint::from_digest(&hasher.finalize())
}

/// Fingerprint a metadata record over its canonical JSON form.
///
/// Keys are sorted at every nesting level, so field order in the source
/// record never affects the result.
pub fn digest_record<T: Serialize + ?Sized>(record: &T) -> Result<Fingerprint, CryptoError> {
    let value = serde_json::to_value(record).map_err(|e| CryptoError::Serialization(e.to_string()))?;
    Ok(digest_bytes(canonical_json(&value).as_bytes()))
}

/// Render a JSON value with object keys sorted recursively.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Serializing a &str into JSON cannot fail.
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

//! Block entity and digest computation
//!
//! `block_digest = SHA-256(index ‖ previous_block_digest ‖ created_at ‖
//! canonical(transactions) ‖ nonce)`, with integers in decimal and
//! `created_at` as RFC 3339 with nanoseconds.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use shared_crypto::{canonical_json, digest_parts, Fingerprint};
use shared_types::{Timestamp, Transaction};

use crate::error::{LedgerError, Result};

/// A sealed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain, 0 for genesis
    pub index: u64,
    /// Time the block was assembled
    pub created_at: Timestamp,
    /// Sealed transactions, in drain order
    pub transactions: Vec<Transaction>,
    /// Digest of the block at `index - 1`, or the genesis sentinel
    pub previous_block_digest: Fingerprint,
    /// Proof-of-work nonce
    pub nonce: u64,
    /// Digest over every field above
    pub block_digest: Fingerprint,
}

/// Lightweight view for listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    /// Block index
    pub index: u64,
    /// Block digest
    pub block_digest: Fingerprint,
    /// Previous digest
    pub previous_block_digest: Fingerprint,
    /// Creation time
    pub created_at: Timestamp,
    /// Number of sealed transactions
    pub transaction_count: usize,
    /// Proof-of-work nonce
    pub nonce: u64,
}

/// Everything hashed into a block digest except the nonce.
///
/// Computed once per candidate so the nonce search only appends digits.
pub(crate) fn digest_preimage(
    index: u64,
    previous_block_digest: &Fingerprint,
    created_at: &Timestamp,
    transactions: &[Transaction],
) -> Result<Vec<u8>> {
    let txs = serde_json::to_value(transactions)
        .map_err(|e| LedgerError::Serialization(e.to_string()))?;

    let mut bytes = Vec::with_capacity(256);
    bytes.extend_from_slice(index.to_string().as_bytes());
    bytes.extend_from_slice(previous_block_digest.as_str().as_bytes());
    bytes.extend_from_slice(
        created_at
            .to_rfc3339_opts(SecondsFormat::Nanos, true)
            .as_bytes(),
    );
    bytes.extend_from_slice(canonical_json(&txs).as_bytes());
    Ok(bytes)
}

/// Digest of a preimage with a given nonce appended.
#[inline]
pub(crate) fn digest_with_nonce(preimage: &[u8], nonce: u64) -> Fingerprint {
    digest_parts(&[preimage, nonce.to_string().as_bytes()])
}

impl Block {
    /// Recompute the digest from this block's own fields.
    pub fn compute_digest(&self) -> Result<Fingerprint> {
        let preimage = digest_preimage(
            self.index,
            &self.previous_block_digest,
            &self.created_at,
            &self.transactions,
        )?;
        Ok(digest_with_nonce(&preimage, self.nonce))
    }

    /// True when the stored digest equals the recomputed one.
    pub fn has_valid_digest(&self) -> bool {
        self.compute_digest()
            .map(|d| d == self.block_digest)
            .unwrap_or(false)
    }

    /// True for index 0.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// Listing view.
    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            index: self.index,
            block_digest: self.block_digest.clone(),
            previous_block_digest: self.previous_block_digest.clone(),
            created_at: self.created_at,
            transaction_count: self.transactions.len(),
            nonce: self.nonce,
        }
    }
}

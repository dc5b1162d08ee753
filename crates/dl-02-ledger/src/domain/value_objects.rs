//! Read-side value objects

use serde::Serialize;
use shared_crypto::Fingerprint;
use shared_types::{Timestamp, Transaction};

/// A transaction together with the block that sealed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedTransaction {
    /// Index of the sealing block
    pub block_index: u64,
    /// Digest of the sealing block
    pub block_digest: Fingerprint,
    /// Block creation time
    pub sealed_at: Timestamp,
    /// The sealed record, as stored
    pub transaction: Transaction,
}

/// Chain-wide statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    /// Blocks including genesis
    pub total_blocks: usize,
    /// Transactions across all blocks
    pub total_sealed_transactions: usize,
    /// Result of a fresh full audit
    pub chain_integrity: bool,
    /// Digest of the tip
    pub latest_block_digest: Fingerprint,
    /// Digest of block 0
    pub genesis_block_digest: Fingerprint,
}

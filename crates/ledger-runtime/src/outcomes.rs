//! Values returned across the external interface.

use dl_02_ledger::Block;
use serde::Serialize;
use shared_types::{DocumentId, Fingerprint, Timestamp, Transaction, TransactionId};

/// Result of `register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOutcome {
    /// The staged or sealed transaction
    pub transaction: Transaction,
    /// Sealing block; `None` while sealing is deferred
    pub block: Option<Block>,
}

impl RegistrationOutcome {
    /// True once the transaction is in a block.
    pub fn is_sealed(&self) -> bool {
        self.block.is_some()
    }
}

/// Result of `verify_by_bytes` / `verify_by_fingerprint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    /// Content is sealed and its record authenticates
    pub verified: bool,
    /// Fingerprint that was looked up
    pub content_fingerprint: Fingerprint,
    /// Sealing block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_index: Option<u64>,
    /// Sealing block digest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_digest: Option<Fingerprint>,
    /// Block creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sealed_at: Option<Timestamp>,
    /// Document that registered the content first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
    /// Registration transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,
    /// HMAC tag and metadata fingerprint both recompute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity_tag_valid: Option<bool>,
}

impl VerificationOutcome {
    pub(crate) fn not_found(content_fingerprint: Fingerprint) -> Self {
        Self {
            verified: false,
            content_fingerprint,
            block_index: None,
            block_digest: None,
            sealed_at: None,
            document_id: None,
            transaction_id: None,
            integrity_tag_valid: None,
        }
    }
}

/// Result of `chain_stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainStats {
    /// Blocks, genesis included
    pub total_blocks: usize,
    /// Transactions across all blocks
    pub total_sealed_transactions: usize,
    /// Transactions waiting in the pool
    pub pending_count: usize,
    /// Fresh audit result
    pub chain_integrity: bool,
    /// Tip digest
    pub latest_block_digest: Fingerprint,
    /// Genesis digest
    pub genesis_block_digest: Fingerprint,
    /// Active difficulty
    pub difficulty: u8,
}

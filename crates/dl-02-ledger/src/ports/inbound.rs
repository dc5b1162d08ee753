//! # Inbound Ports (Driving Ports)
//!
//! Read-side API of the ledger. Every call observes a consistent snapshot:
//! a block is either fully appended or not visible at all.

use shared_crypto::Fingerprint;
use shared_types::{DocumentId, TransactionId};

use crate::domain::{BlockSummary, ChainAudit, LedgerStats, SealedTransaction};

/// Query surface of the ledger.
pub trait LedgerApi: Send + Sync {
    /// Full audit. Returns the first fault found, if any.
    fn audit_chain(&self) -> ChainAudit;

    /// `true` only if every block passes the digest and link checks.
    fn validate_chain(&self) -> bool {
        self.audit_chain().is_intact()
    }

    /// Earliest sealed transaction carrying this content fingerprint.
    fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Option<SealedTransaction>;

    /// Earliest sealed transaction for this document.
    fn find_by_document_id(&self, document_id: &DocumentId) -> Option<SealedTransaction>;

    /// Sealed transaction by id.
    fn find_by_transaction_id(&self, transaction_id: &TransactionId)
        -> Option<SealedTransaction>;

    /// Counts, tip/genesis digests and a fresh integrity flag.
    fn stats(&self) -> LedgerStats;

    /// Newest blocks first.
    fn recent_blocks(&self, limit: usize) -> Vec<BlockSummary>;

    /// Number of blocks, genesis included.
    fn height(&self) -> usize;
}

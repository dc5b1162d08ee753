//! Side index for sealed-transaction lookup
//!
//! Maps content fingerprint, document id and transaction id to a slot in
//! the stored block list. Rebuilt from the blocks on demand; the blocks stay
//! authoritative. When several transactions share a key, the one sealed
//! first (lowest block index, then lowest position) wins.

use shared_crypto::Fingerprint;
use shared_types::{DocumentId, TransactionId};
use std::collections::HashMap;

use super::block::Block;

/// Where a sealed transaction lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TxLocation {
    /// Slot in the stored block list. Equals the block index only while
    /// the chain is intact.
    pub slot: usize,
    /// Offset within the block's transaction list
    pub position: usize,
}

/// Lookup tables over the sealed transactions.
#[derive(Clone, Debug, Default)]
pub struct LookupIndex {
    by_content: HashMap<Fingerprint, TxLocation>,
    by_document: HashMap<DocumentId, TxLocation>,
    by_transaction: HashMap<TransactionId, TxLocation>,
}

impl LookupIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from scratch over a block sequence.
    pub fn rebuild<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Self {
        let mut index = Self::new();
        for (slot, block) in blocks.into_iter().enumerate() {
            index.record_block(slot, block);
        }
        index
    }

    /// Record every transaction of the block stored at `slot`. Existing
    /// entries are kept.
    pub fn record_block(&mut self, slot: usize, block: &Block) {
        for (position, tx) in block.transactions.iter().enumerate() {
            let loc = TxLocation { slot, position };
            self.by_content
                .entry(tx.content_fingerprint.clone())
                .or_insert(loc);
            self.by_document
                .entry(tx.document_id.clone())
                .or_insert(loc);
            self.by_transaction.entry(tx.transaction_id).or_insert(loc);
        }
    }

    /// Location by content fingerprint.
    pub fn by_content(&self, fingerprint: &Fingerprint) -> Option<TxLocation> {
        self.by_content.get(fingerprint).copied()
    }

    /// Location by document id.
    pub fn by_document(&self, document_id: &DocumentId) -> Option<TxLocation> {
        self.by_document.get(document_id).copied()
    }

    /// Location by transaction id.
    pub fn by_transaction(&self, transaction_id: &TransactionId) -> Option<TxLocation> {
        self.by_transaction.get(transaction_id).copied()
    }

    /// Indexed transaction count.
    pub fn len(&self) -> usize {
        self.by_transaction.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.by_transaction.is_empty()
    }
}

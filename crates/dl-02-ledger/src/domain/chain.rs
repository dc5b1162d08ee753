//! The chain: ordered blocks, append checks and full audit

use serde::Serialize;
use shared_crypto::Fingerprint;
use shared_types::{DocumentId, TransactionId};

use super::block::{Block, BlockSummary};
use super::difficulty::Difficulty;
use super::index::{LookupIndex, TxLocation};
use super::value_objects::SealedTransaction;
use crate::error::{LedgerError, Result};

/// First problem found by [`Chain::audit`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChainFault {
    /// Stored digest differs from the recomputed one
    DigestMismatch {
        /// Offending block
        index: u64,
    },
    /// `previous_block_digest` differs from the prior block's digest
    BrokenLink {
        /// Offending block
        index: u64,
    },
    /// Stored index differs from the block's position
    IndexGap {
        /// Position in the chain
        expected: u64,
        /// Stored index
        actual: u64,
    },
    /// Digest does not meet the chain's difficulty
    DifficultyNotMet {
        /// Offending block
        index: u64,
    },
}

impl ChainFault {
    /// Position of the faulty block.
    pub fn block_index(&self) -> u64 {
        match self {
            ChainFault::DigestMismatch { index }
            | ChainFault::BrokenLink { index }
            | ChainFault::DifficultyNotMet { index } => *index,
            ChainFault::IndexGap { expected, .. } => *expected,
        }
    }
}

/// Outcome of a full audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAudit {
    /// Blocks examined before stopping
    pub blocks_checked: usize,
    /// First fault, if any
    pub fault: Option<ChainFault>,
}

impl ChainAudit {
    /// True when every block passed.
    pub fn is_intact(&self) -> bool {
        self.fault.is_none()
    }
}

/// Append-only block sequence with its lookup index.
///
/// Never empty: always starts with the genesis block.
#[derive(Clone, Debug)]
pub struct Chain {
    blocks: Vec<Block>,
    index: LookupIndex,
    difficulty: Difficulty,
}

impl Chain {
    /// Start a chain from a freshly mined genesis block.
    pub fn new(genesis: Block, difficulty: Difficulty) -> Self {
        let index = LookupIndex::rebuild(std::iter::once(&genesis));
        Self {
            blocks: vec![genesis],
            index,
            difficulty,
        }
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Difficulty every block must meet.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Index 0.
    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// Latest block.
    pub fn tip(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    /// Index the next block must carry.
    pub fn next_index(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// Block at a position.
    pub fn block(&self, index: u64) -> Option<&Block> {
        self.blocks.get(index as usize)
    }

    /// All blocks, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a mined block after checking it against the tip.
    pub fn append(&mut self, block: Block) -> Result<()> {
        let expected = self.next_index();
        if block.index != expected {
            return Err(LedgerError::IndexMismatch {
                expected,
                actual: block.index,
            });
        }
        if block.transactions.is_empty() {
            return Err(LedgerError::EmptyBlock { index: block.index });
        }
        if block.previous_block_digest != self.tip().block_digest {
            return Err(LedgerError::BrokenLink { index: block.index });
        }
        if !block.has_valid_digest() {
            return Err(LedgerError::DigestMismatch { index: block.index });
        }
        if !self.difficulty.is_met_by(&block.block_digest) {
            return Err(LedgerError::DifficultyNotMet {
                index: block.index,
                required: self.difficulty.leading_zeros(),
            });
        }

        self.index.record_block(self.blocks.len(), &block);
        self.blocks.push(block);
        Ok(())
    }

    /// Recompute every digest and link. Stops at the first fault.
    ///
    /// Genesis is checked for its own digest only.
    pub fn audit(&self) -> ChainAudit {
        for (position, block) in self.blocks.iter().enumerate() {
            let fault = self.check_block(position, block);
            if fault.is_some() {
                return ChainAudit {
                    blocks_checked: position + 1,
                    fault,
                };
            }
        }
        ChainAudit {
            blocks_checked: self.blocks.len(),
            fault: None,
        }
    }

    fn check_block(&self, position: usize, block: &Block) -> Option<ChainFault> {
        let expected = position as u64;
        if block.index != expected {
            return Some(ChainFault::IndexGap {
                expected,
                actual: block.index,
            });
        }
        if !block.has_valid_digest() {
            return Some(ChainFault::DigestMismatch { index: expected });
        }
        if position > 0 && block.previous_block_digest != self.blocks[position - 1].block_digest {
            return Some(ChainFault::BrokenLink { index: expected });
        }
        if !self.difficulty.is_met_by(&block.block_digest) {
            return Some(ChainFault::DifficultyNotMet { index: expected });
        }
        None
    }

    /// Shorthand for `audit().is_intact()`.
    pub fn is_valid(&self) -> bool {
        self.audit().is_intact()
    }

    /// Earliest sealed transaction with this content fingerprint.
    pub fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Option<SealedTransaction> {
        self.index
            .by_content(fingerprint)
            .and_then(|loc| self.resolve(loc))
    }

    /// Earliest sealed transaction for this document.
    pub fn find_by_document_id(&self, document_id: &DocumentId) -> Option<SealedTransaction> {
        self.index
            .by_document(document_id)
            .and_then(|loc| self.resolve(loc))
    }

    /// Sealed transaction by id.
    pub fn find_by_transaction_id(
        &self,
        transaction_id: &TransactionId,
    ) -> Option<SealedTransaction> {
        self.index
            .by_transaction(transaction_id)
            .and_then(|loc| self.resolve(loc))
    }

    fn resolve(&self, loc: TxLocation) -> Option<SealedTransaction> {
        let block = self.blocks.get(loc.slot)?;
        let transaction = block.transactions.get(loc.position)?;
        Some(SealedTransaction {
            block_index: block.index,
            block_digest: block.block_digest.clone(),
            sealed_at: block.created_at,
            transaction: transaction.clone(),
        })
    }

    /// Transactions across all blocks.
    pub fn total_transactions(&self) -> usize {
        self.blocks.iter().map(|b| b.transactions.len()).sum()
    }

    /// Summaries of the newest `limit` blocks, newest first.
    pub fn recent(&self, limit: usize) -> Vec<BlockSummary> {
        self.blocks
            .iter()
            .rev()
            .take(limit)
            .map(Block::summary)
            .collect()
    }

    /// Direct mutable access for tamper tests. Rebuilds the index afterwards.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn tamper<F: FnOnce(&mut Vec<Block>)>(&mut self, f: F) {
        f(&mut self.blocks);
        self.index = LookupIndex::rebuild(self.blocks.iter());
    }
}

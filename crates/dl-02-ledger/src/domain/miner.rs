//! Proof-of-work miner
//!
//! Bounded search: nonce 0, 1, 2, ... until the digest meets the difficulty.
//! Runs synchronously on the caller's thread.

use shared_crypto::Fingerprint;
use shared_types::{Timestamp, Transaction};
use std::time::Instant;
use tracing::debug;

use super::block::{digest_preimage, digest_with_nonce, Block};
use super::difficulty::Difficulty;
use crate::error::{LedgerError, Result};

/// Single-threaded nonce searcher.
#[derive(Clone, Debug)]
pub struct ProofOfWorkMiner {
    difficulty: Difficulty,
}

impl ProofOfWorkMiner {
    /// Create a miner for a fixed difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Build a block and search nonces from 0 upward.
    #[tracing::instrument(
        skip(self, previous_block_digest, created_at, transactions),
        fields(difficulty = self.difficulty.leading_zeros(), tx_count = transactions.len())
    )]
    pub fn mine(
        &self,
        index: u64,
        previous_block_digest: Fingerprint,
        created_at: Timestamp,
        transactions: Vec<Transaction>,
    ) -> Result<Block> {
        let preimage = digest_preimage(index, &previous_block_digest, &created_at, &transactions)?;
        let started = Instant::now();

        for nonce in 0..=u64::MAX {
            let digest = digest_with_nonce(&preimage, nonce);
            if self.difficulty.is_met_by(&digest) {
                debug!(
                    nonce,
                    digest = digest.short(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Found valid nonce"
                );
                return Ok(Block {
                    index,
                    created_at,
                    transactions,
                    previous_block_digest,
                    nonce,
                    block_digest: digest,
                });
            }
        }

        Err(LedgerError::MiningExhausted { index })
    }
}

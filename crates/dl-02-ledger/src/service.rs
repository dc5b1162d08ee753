//! Ledger service
//!
//! Wraps the pure [`Chain`] with the locking the ledger needs:
//!
//! - `chain`: `RwLock`, readers share it, append takes it exclusively
//! - `seal_lock`: serializes drain → mine → append so one seal runs at a time
//!
//! The nonce search runs while holding only `seal_lock`, so readers are never
//! blocked by mining.

use parking_lot::{Mutex, RwLock};
use shared_crypto::Fingerprint;
use shared_types::{DocumentId, TimeSource, TransactionId};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::config::MiningConfig;
use crate::domain::{
    create_genesis_block, Block, BlockSummary, Chain, ChainAudit, LedgerStats,
    ProofOfWorkMiner, SealedTransaction,
};
use crate::error::Result;
use crate::ports::{LedgerApi, PendingTransactionSource};

/// The process-wide ledger.
pub struct LedgerService {
    chain: RwLock<Chain>,
    seal_lock: Mutex<()>,
    miner: ProofOfWorkMiner,
    clock: Arc<dyn TimeSource>,
}

impl LedgerService {
    /// Validate the config and mine the genesis block.
    pub fn new(config: MiningConfig, clock: Arc<dyn TimeSource>) -> Result<Self> {
        let difficulty = config.validate()?;
        let miner = ProofOfWorkMiner::new(difficulty);
        let genesis = create_genesis_block(&miner, clock.now())?;

        info!(
            "[dl-02] Genesis block mined: digest={} nonce={} difficulty={}",
            genesis.block_digest.short(),
            genesis.nonce,
            difficulty.leading_zeros()
        );

        Ok(Self {
            chain: RwLock::new(Chain::new(genesis, difficulty)),
            seal_lock: Mutex::new(()),
            miner,
            clock,
        })
    }

    /// Seal everything pending into one new block.
    ///
    /// Returns `Ok(None)` without mining when the source is empty. On failure
    /// the drained transactions are handed back to the source.
    pub fn seal_pending(&self, source: &dyn PendingTransactionSource) -> Result<Option<Block>> {
        let _sealing = self.seal_lock.lock();

        let transactions = source.drain_all();
        if transactions.is_empty() {
            return Ok(None);
        }

        let (index, previous) = {
            let chain = self.chain.read();
            (chain.next_index(), chain.tip().block_digest.clone())
        };
        let tx_count = transactions.len();
        let started = Instant::now();

        let block = match self
            .miner
            .mine(index, previous, self.clock.now(), transactions.clone())
        {
            Ok(block) => block,
            Err(e) => {
                error!("[dl-02] Mining block {} failed: {}", index, e);
                source.requeue(transactions);
                return Err(e);
            }
        };

        if let Err(e) = self.chain.write().append(block.clone()) {
            error!("[dl-02] Rejected freshly mined block {}: {}", index, e);
            source.requeue(transactions);
            return Err(e);
        }

        info!(
            "[dl-02] Sealed block {} with {} transaction(s): digest={} nonce={} in {}ms",
            index,
            tx_count,
            block.block_digest.short(),
            block.nonce,
            started.elapsed().as_millis()
        );
        Ok(Some(block))
    }

    /// Active difficulty in leading hex zeros.
    pub fn difficulty(&self) -> u8 {
        self.miner.difficulty().leading_zeros()
    }

    /// Copy of one block.
    pub fn block(&self, index: u64) -> Option<Block> {
        self.chain.read().block(index).cloned()
    }

    /// Digest of the genesis block.
    pub fn genesis_digest(&self) -> Fingerprint {
        self.chain.read().genesis().block_digest.clone()
    }

    /// Mutate stored blocks in place, bypassing every check.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn tamper_with<F: FnOnce(&mut Vec<Block>)>(&self, f: F) {
        warn!("[dl-02] Test hook mutating stored blocks");
        self.chain.write().tamper(f);
    }
}

impl LedgerApi for LedgerService {
    fn audit_chain(&self) -> ChainAudit {
        let audit = self.chain.read().audit();
        if let Some(fault) = &audit.fault {
            warn!("[dl-02] Chain audit failed: {:?}", fault);
        }
        audit
    }

    fn find_by_fingerprint(&self, fingerprint: &Fingerprint) -> Option<SealedTransaction> {
        self.chain.read().find_by_fingerprint(fingerprint)
    }

    fn find_by_document_id(&self, document_id: &DocumentId) -> Option<SealedTransaction> {
        self.chain.read().find_by_document_id(document_id)
    }

    fn find_by_transaction_id(
        &self,
        transaction_id: &TransactionId,
    ) -> Option<SealedTransaction> {
        self.chain.read().find_by_transaction_id(transaction_id)
    }

    fn stats(&self) -> LedgerStats {
        let chain = self.chain.read();
        let chain_integrity = chain.is_valid();
        LedgerStats {
            total_blocks: chain.len(),
            total_sealed_transactions: chain.total_transactions(),
            chain_integrity,
            latest_block_digest: chain.tip().block_digest.clone(),
            genesis_block_digest: chain.genesis().block_digest.clone(),
        }
    }

    fn recent_blocks(&self, limit: usize) -> Vec<BlockSummary> {
        self.chain.read().recent(limit)
    }

    fn height(&self) -> usize {
        self.chain.read().len()
    }
}

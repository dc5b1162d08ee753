//! # Pool → Ledger Adapter
//!
//! Lets the ledger's sealer drain the shared transaction pool.

use dl_01_transaction_pool::{SharedTransactionPool, TransactionPoolApi};
use dl_02_ledger::PendingTransactionSource;
use ledger_telemetry::POOL_PENDING;
use shared_types::Transaction;
use std::sync::Arc;

/// `PendingTransactionSource` over the shared pool.
#[derive(Clone)]
pub struct PoolSource {
    pool: Arc<SharedTransactionPool>,
}

impl PoolSource {
    /// Adapter over `pool`.
    pub fn new(pool: Arc<SharedTransactionPool>) -> Self {
        Self { pool }
    }
}

impl PendingTransactionSource for PoolSource {
    fn drain_all(&self) -> Vec<Transaction> {
        let drained = self.pool.drain_all();
        POOL_PENDING.set(self.pool.pending_count() as f64);
        drained
    }

    fn requeue(&self, transactions: Vec<Transaction>) {
        self.pool.requeue(transactions);
        POOL_PENDING.set(self.pool.pending_count() as f64);
    }
}

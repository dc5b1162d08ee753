//! # Shared Transaction Pool
//!
//! Thread-safe wrapper implementing [`TransactionPoolApi`]. A single mutex
//! guards the staging list, so `submit` and `drain_all` are linearizable.

use crate::domain::{
    Fingerprint, PoolConfig, PoolError, PoolStatus, RegistrationRequest, Transaction,
    TransactionPool,
};
use crate::ports::TransactionPoolApi;
use parking_lot::Mutex;
use shared_types::{IntegrityKey, TimeSource};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Pool shared between request handlers and the miner.
pub struct SharedTransactionPool {
    inner: Mutex<TransactionPool>,
    key: IntegrityKey,
    clock: Arc<dyn TimeSource>,
}

impl SharedTransactionPool {
    /// Create a pool that tags transactions with `key`.
    pub fn new(config: PoolConfig, key: IntegrityKey, clock: Arc<dyn TimeSource>) -> Self {
        info!(max_pending = config.max_pending, "[dl-01] Transaction pool initialized");
        Self {
            inner: Mutex::new(TransactionPool::new(config)),
            key,
            clock,
        }
    }

    /// Pending transactions, oldest first.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.inner.lock().pending().to_vec()
    }
}

impl TransactionPoolApi for SharedTransactionPool {
    fn submit(
        &self,
        request: &RegistrationRequest,
        content_fingerprint: Fingerprint,
    ) -> Result<Transaction, PoolError> {
        let now = self.clock.now();
        let tx = self
            .inner
            .lock()
            .submit(request, content_fingerprint, now, &self.key)?;
        debug!(
            transaction_id = %tx.transaction_id,
            document_id = %tx.document_id,
            fingerprint = tx.content_fingerprint.short(),
            "[dl-01] Transaction staged"
        );
        Ok(tx)
    }

    fn drain_all(&self) -> Vec<Transaction> {
        let drained = self.inner.lock().drain_all();
        if !drained.is_empty() {
            debug!(count = drained.len(), "[dl-01] Pool drained for sealing");
        }
        drained
    }

    fn requeue(&self, transactions: Vec<Transaction>) {
        if transactions.is_empty() {
            return;
        }
        warn!(count = transactions.len(), "[dl-01] Requeueing transactions after failed seal");
        self.inner.lock().requeue(transactions);
    }

    fn pending_count(&self) -> usize {
        self.inner.lock().len()
    }

    fn status(&self) -> PoolStatus {
        self.inner.lock().status()
    }
}

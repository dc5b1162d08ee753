//! # Transaction Pool - Pending Staging List
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: every accepted transaction gets a fresh id and tag
//! - INVARIANT-3: `drain_all()` leaves the pool empty
//! - INVARIANT-4: capacity is bounded (`PoolFull`)

use super::entities::{Fingerprint, PoolConfig, RegistrationRequest, Transaction};
use super::errors::PoolError;
use super::value_objects::PoolStatus;
use shared_types::{IntegrityKey, Timestamp};

/// Pending transactions in arrival order.
///
/// Not thread-safe on its own; `SharedTransactionPool` wraps it in a mutex.
#[derive(Debug)]
pub struct TransactionPool {
    config: PoolConfig,
    pending: Vec<Transaction>,
    total_submitted: u64,
    total_drained: u64,
}

impl TransactionPool {
    /// Creates a new empty transaction pool.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            pending: Vec::new(),
            total_submitted: 0,
            total_drained: 0,
        }
    }

    /// Creates a pool with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PoolConfig::default())
    }

    /// Returns the number of pending transactions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is waiting to be sealed.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending transactions, oldest first.
    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Builds, tags and stages a transaction.
    ///
    /// # Errors
    /// - `InvalidRegistration` if the metadata is missing a required field
    /// - `PoolFull` if at capacity
    pub fn submit(
        &mut self,
        request: &RegistrationRequest,
        content_fingerprint: Fingerprint,
        now: Timestamp,
        key: &IntegrityKey,
    ) -> Result<Transaction, PoolError> {
        if self.pending.len() >= self.config.max_pending {
            return Err(PoolError::PoolFull {
                capacity: self.config.max_pending,
            });
        }

        let tx = Transaction::new(request, content_fingerprint, now, key)?;
        self.pending.push(tx.clone());
        self.total_submitted += 1;
        Ok(tx)
    }

    /// Removes and returns every pending transaction.
    pub fn drain_all(&mut self) -> Vec<Transaction> {
        let drained = std::mem::take(&mut self.pending);
        self.total_drained += drained.len() as u64;
        drained
    }

    /// Puts transactions back at the front of the pool after a failed seal.
    ///
    /// Capacity is not enforced: these were already accepted once.
    pub fn requeue(&mut self, mut transactions: Vec<Transaction>) {
        self.total_drained = self.total_drained.saturating_sub(transactions.len() as u64);
        transactions.append(&mut self.pending);
        self.pending = transactions;
    }

    /// Current statistics.
    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            pending_count: self.pending.len(),
            total_submitted: self.total_submitted,
            total_drained: self.total_drained,
        }
    }
}

//! # Inbound Port - TransactionPoolApi
//!
//! Primary driving port exposing the staging pool to the upload flow and to
//! the miner.

use crate::domain::{Fingerprint, PoolError, PoolStatus, RegistrationRequest, Transaction};

/// Primary API for the Transaction Pool subsystem.
///
/// # Example
///
/// ```rust,ignore
/// use dl_01_transaction_pool::TransactionPoolApi;
///
/// fn example(pool: &impl TransactionPoolApi, request: &RegistrationRequest, fp: Fingerprint) {
///     let tx = pool.submit(request, fp)?;
///     // ... later, inside the miner
///     let batch = pool.drain_all();
/// }
/// ```
pub trait TransactionPoolApi: Send + Sync {
    /// Builds a tagged transaction with a fresh id and stages it.
    ///
    /// # Errors
    /// - `InvalidRegistration`: required metadata missing
    /// - `PoolFull`: capacity reached
    fn submit(
        &self,
        request: &RegistrationRequest,
        content_fingerprint: Fingerprint,
    ) -> Result<Transaction, PoolError>;

    /// Atomically removes and returns every pending transaction.
    ///
    /// No transaction submitted concurrently is lost or returned twice.
    fn drain_all(&self) -> Vec<Transaction>;

    /// Returns drained transactions to the front of the pool when sealing
    /// failed before the block was appended.
    fn requeue(&self, transactions: Vec<Transaction>);

    /// Number of transactions awaiting sealing.
    fn pending_count(&self) -> usize;

    /// Pool statistics.
    fn status(&self) -> PoolStatus;
}

//! # Outbound Ports (Driven Ports)
//!
//! What the sealer needs from the host: somewhere to drain pending
//! transactions from, and a way to hand them back if sealing fails.

use shared_types::Transaction;

/// Pending-transaction source drained by [`crate::LedgerService::seal_pending`].
///
/// Production: `SharedTransactionPool` (via the runtime adapter)
/// Testing: `VecSource` in `service.rs` tests
pub trait PendingTransactionSource: Send + Sync {
    /// Atomically take every pending transaction, in submission order.
    fn drain_all(&self) -> Vec<Transaction>;

    /// Return transactions whose seal failed, ahead of anything newer.
    fn requeue(&self, transactions: Vec<Transaction>);
}

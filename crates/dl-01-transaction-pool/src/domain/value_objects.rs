//! Pool value objects.

use serde::Serialize;

/// Point-in-time pool statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatus {
    /// Transactions awaiting sealing.
    pub pending_count: usize,
    /// Transactions accepted since start.
    pub total_submitted: u64,
    /// Transactions handed to the miner since start.
    pub total_drained: u64,
}

//! Pool configuration.

pub use shared_types::{DocumentId, Fingerprint, RegistrationRequest, Transaction};

/// Transaction pool configuration.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Maximum pending transactions before `submit` is refused.
    pub max_pending: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pending: 10_000,
        }
    }
}

impl PoolConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self { max_pending: 4 }
    }
}

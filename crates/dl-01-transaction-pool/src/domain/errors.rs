//! Transaction pool error types.

use shared_types::EntityError;
use thiserror::Error;

/// Transaction pool error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Registration metadata was rejected.
    #[error("Invalid registration: {0}")]
    InvalidRegistration(#[from] EntityError),

    /// Pool has reached maximum capacity.
    #[error("Pool full at {capacity} pending transactions")]
    PoolFull {
        /// Configured capacity.
        capacity: usize,
    },
}

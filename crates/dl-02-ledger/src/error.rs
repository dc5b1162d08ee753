//! Error types for the ledger subsystem

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while sealing or appending blocks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A non-genesis block carried no transactions
    #[error("Refusing to append empty block at index {index}")]
    EmptyBlock {
        /// Index of the rejected block
        index: u64,
    },

    /// Block index does not continue the chain
    #[error("Index mismatch: expected {expected}, got {actual}")]
    IndexMismatch {
        /// Next index the chain expects
        expected: u64,
        /// Index carried by the block
        actual: u64,
    },

    /// Block does not reference the current tail
    #[error("Block {index} does not link to the chain tail")]
    BrokenLink {
        /// Index of the rejected block
        index: u64,
    },

    /// Stored digest differs from the recomputed one
    #[error("Digest mismatch at block {index}")]
    DigestMismatch {
        /// Index of the rejected block
        index: u64,
    },

    /// Digest lacks the required leading zeros
    #[error("Block {index} does not meet difficulty {required}")]
    DifficultyNotMet {
        /// Index of the rejected block
        index: u64,
        /// Required leading hex zeros
        required: u8,
    },

    /// Nonce space exhausted without a valid digest
    #[error("Mining failed: no valid nonce found for block {index}")]
    MiningExhausted {
        /// Index of the candidate block
        index: u64,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Canonical encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LedgerError {
    /// True when the caller may simply retry the seal
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MiningExhausted { .. } | Self::Serialization(_))
    }

    /// True when the error indicates a broken invariant rather than bad input
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::IndexMismatch { .. }
                | Self::BrokenLink { .. }
                | Self::DigestMismatch { .. }
                | Self::DifficultyNotMet { .. }
        )
    }
}

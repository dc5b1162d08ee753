//! Configuration types for sealing

use crate::domain::Difficulty;
use crate::error::{LedgerError, Result};
use serde::Deserialize;

/// Default leading hex zeros required of a block digest.
pub const DEFAULT_DIFFICULTY: u8 = 2;

/// Highest accepted difficulty. Each step multiplies expected work by 16.
pub const MAX_DIFFICULTY: u8 = 8;

/// Proof-of-work configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MiningConfig {
    /// Required leading `'0'` hex characters in every block digest
    pub difficulty: u8,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl MiningConfig {
    /// Reject difficulties that would stall sealing on the request path
    pub fn validate(&self) -> Result<Difficulty> {
        if self.difficulty > MAX_DIFFICULTY {
            return Err(LedgerError::InvalidConfig(format!(
                "difficulty {} exceeds maximum {}",
                self.difficulty, MAX_DIFFICULTY
            )));
        }
        Ok(Difficulty::new(self.difficulty))
    }

    /// Difficulty 1, for fast tests
    pub fn for_testing() -> Self {
        Self { difficulty: 1 }
    }
}

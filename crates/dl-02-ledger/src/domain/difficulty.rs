//! Difficulty policy
//!
//! A block digest is valid when it starts with at least `n` `'0'` hex
//! characters. The count is a process-wide constant, never adjusted, and
//! kept small so sealing stays well under a second.

use serde::{Deserialize, Serialize};
use shared_crypto::Fingerprint;

/// Required count of leading hex zeros.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Wrap a leading-zero count.
    pub fn new(leading_zeros: u8) -> Self {
        Self(leading_zeros)
    }

    /// Leading-zero count.
    pub fn leading_zeros(&self) -> u8 {
        self.0
    }

    /// Check the predicate against a digest.
    #[inline]
    pub fn is_met_by(&self, digest: &Fingerprint) -> bool {
        digest.leading_zero_hex() >= self.0 as usize
    }

    /// Expected number of hash attempts (16^n).
    pub fn expected_attempts(&self) -> u64 {
        16u64.saturating_pow(self.0 as u32)
    }
}

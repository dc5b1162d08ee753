//! Genesis block
//!
//! Index 0, no transactions, previous digest is the all-zero sentinel. Mined
//! once when the ledger is constructed, with the construction time as
//! `created_at`, so two ledgers never share a genesis digest.

use shared_crypto::Fingerprint;
use shared_types::Timestamp;

use super::block::Block;
use super::miner::ProofOfWorkMiner;
use crate::error::Result;

/// Previous-digest sentinel carried by the genesis block.
pub const GENESIS_PREVIOUS_DIGEST: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Mine the genesis block.
pub fn create_genesis_block(miner: &ProofOfWorkMiner, created_at: Timestamp) -> Result<Block> {
    miner.mine(0, Fingerprint::zero(), created_at, Vec::new())
}

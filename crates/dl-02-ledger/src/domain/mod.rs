//! Domain layer - pure ledger logic
//!
//! No I/O and no locking here; `service.rs` adds concurrency.
//!
//! ## Entities
//!
//! - [`Block`]: sealed batch of transactions with its proof of work
//! - [`Chain`]: ordered blocks plus the lookup index
//!
//! ## Services
//!
//! - [`ProofOfWorkMiner`]: nonce search against a [`Difficulty`]
//! - [`create_genesis_block`]: the fixed index-0 block
//! - [`Chain::audit`]: full recomputation of digests and links

mod block;
mod chain;
pub mod difficulty;
pub mod genesis;
mod index;
mod miner;
mod value_objects;

pub use block::{Block, BlockSummary};
pub use chain::{Chain, ChainAudit, ChainFault};
pub use difficulty::Difficulty;
pub use genesis::{create_genesis_block, GENESIS_PREVIOUS_DIGEST};
pub use index::{LookupIndex, TxLocation};
pub use miner::ProofOfWorkMiner;
pub use value_objects::{LedgerStats, SealedTransaction};

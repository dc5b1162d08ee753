//! # Document Ledger (Subsystem 2)
//!
//! The authoritative, append-only chain of sealed document registrations.
//!
//! ## Purpose
//!
//! - Mine the genesis block once, at construction
//! - Seal the pending pool into a new block via a leading-zero proof-of-work
//! - Audit the chain: every digest recomputed, every link checked
//! - Locate a sealed transaction by content fingerprint, document id or
//!   transaction id
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Gapless indices | `domain/chain.rs` - `append()` |
//! | 2 | Linkage | `previous_block_digest == chain[i-1].block_digest` |
//! | 3 | Proof of work | digest has `difficulty` leading hex zeros |
//! | 4 | No empty blocks | `service.rs` - `seal_pending()` returns `None` |
//! | 5 | Append-only | no API removes or rewrites a block |
//! | 6 | Single writer | `service.rs` - seal mutex around drain→mine→append |
//! | 7 | Consistent reads | chain behind `RwLock`, append under write lock |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Block, genesis, difficulty, miner, chain audit, lookup index
//! - `ports/` - `LedgerApi` (inbound), `PendingTransactionSource` (outbound)
//! - `service.rs` - `LedgerService` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use dl_02_ledger::{LedgerService, MiningConfig};
//!
//! let ledger = LedgerService::new(MiningConfig::default(), clock)?;
//! let sealed = ledger.seal_pending(&pool)?;       // Option<Block>
//! assert!(ledger.validate_chain());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use config::MiningConfig;
pub use domain::{
    create_genesis_block, Block, BlockSummary, Chain, ChainAudit, ChainFault, Difficulty,
    LedgerStats, LookupIndex, ProofOfWorkMiner, SealedTransaction, TxLocation,
    GENESIS_PREVIOUS_DIGEST,
};
pub use error::{LedgerError, Result};
pub use ports::{LedgerApi, PendingTransactionSource};
pub use service::LedgerService;

/// Subsystem identifier used in log lines.
pub const SUBSYSTEM_ID: u8 = 2;

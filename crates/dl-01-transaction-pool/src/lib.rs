//! # Transaction Pool Subsystem
//!
//! **Subsystem ID:** 1
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Stages document-registration transactions between upload and sealing.
//! The pool is unordered and append-only: transactions enter through
//! `submit` and leave only through `drain_all`, which hands every pending
//! transaction to the miner in one step.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Fresh id and tag per transaction | `domain/pool.rs` - `submit()` |
//! | INVARIANT-2 | Drain is atomic w.r.t. submit | `service.rs` - single `Mutex` |
//! | INVARIANT-3 | Drained transactions leave the pool | `domain/pool.rs` - `drain_all()` |
//! | INVARIANT-4 | Bounded capacity | `domain/pool.rs` - `PoolFull` |
//!
//! Duplicate *content* is not rejected here; that is a caller policy applied
//! against the ledger.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs          - SharedTransactionPool (thread-safe)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs    - TransactionPoolApi trait                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs  - PoolConfig                               │
//! │  domain/pool.rs      - TransactionPool                          │
//! │  domain/value_objects.rs - PoolStatus                           │
//! │  domain/errors.rs    - PoolError                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::TransactionPoolApi;
pub use service::SharedTransactionPool;

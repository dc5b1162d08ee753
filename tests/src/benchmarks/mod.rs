//! # Document Ledger Benchmarks
//!
//! Criterion benchmark groups per subsystem, run from
//! `benches/ledger_benchmarks.rs`.

pub mod dl_01_pool;
pub mod dl_02_ledger;

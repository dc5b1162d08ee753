//! # Document Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── dl_01_pool.rs
//! │   └── dl_02_ledger.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── flows.rs      # Register → seal → verify → review → certificate
//!     ├── tampering.rs  # Direct block mutation against the audit
//!     └── concurrency.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dl-tests
//!
//! # By category
//! cargo test -p dl-tests integration::tampering::
//!
//! # Benchmarks
//! cargo bench -p dl-tests
//! ```

#![allow(unused_variables)]
#![allow(dead_code)]

pub mod benchmarks;
pub mod integration;

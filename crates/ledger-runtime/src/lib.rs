//! # Document Ledger Runtime Library
//!
//! Wires the subsystems together behind [`DocumentLedgerRuntime`], the one
//! interface collaborators call. The `main.rs` binary is a thin CLI over it.
//!
//! ## External Interface
//!
//! | Operation | Method |
//! |-----------|--------|
//! | register | [`DocumentLedgerRuntime::register`] |
//! | verifyByBytes | [`DocumentLedgerRuntime::verify_by_bytes`] |
//! | verifyByFingerprint | [`DocumentLedgerRuntime::verify_by_fingerprint`] |
//! | chainStats | [`DocumentLedgerRuntime::chain_stats`] |
//! | recordReviewDecision | [`DocumentLedgerRuntime::record_review_decision`] |
//! | generateCertificate | [`DocumentLedgerRuntime::generate_certificate`] |
//!
//! ## Modules
//!
//! - `container/` - configuration and subsystem wiring
//! - `adapters/` - port implementations between subsystems
//! - `sealer` - background sealing for deferred mode

#![warn(missing_docs)]

pub mod adapters;
pub mod container;
pub mod error;
pub mod outcomes;
pub mod runtime;
pub mod sealer;

pub use container::{ConfigError, LedgerConfig, SealingMode, SubsystemContainer};
pub use error::{Result, RuntimeError};
pub use outcomes::{ChainStats, RegistrationOutcome, VerificationOutcome};
pub use runtime::DocumentLedgerRuntime;
pub use sealer::{spawn_sealer, SealerHandle};

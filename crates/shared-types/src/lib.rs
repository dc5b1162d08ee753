//! # Shared Types Crate
//!
//! Ledger entities shared by the transaction pool, the ledger, the
//! verification-status tracker and the certificate generator.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Transaction` is defined once and copied
//!   verbatim from the pool into exactly one block.
//! - **Bound to the instance**: every transaction carries an HMAC integrity
//!   tag computed with the process-wide secret.
//! - **Injected clock**: subsystems read time through [`TimeSource`] so tests
//!   can pin timestamps.

pub mod entities;
pub mod errors;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource, Timestamp};

pub use shared_crypto::{Fingerprint, IntegrityKey};

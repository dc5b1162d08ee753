//! # Verification Status Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Tracks each registered document through text extraction and human
//! review:
//!
//! ```text
//! pending ──ocr ok──▶ ocr-processed ──case assigned──▶ lawyer-review ──┬─▶ verified
//!    │                                                                  └─▶ rejected
//!    └─ocr failed─▶ pending (outcome recorded)
//! ```
//!
//! Sealing is orthogonal: the `blockchain` sub-record is attached whenever
//! the ledger seals the document's transaction, independent of status.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Review only from `lawyer-review` | `domain/record.rs` - `apply_review()` |
//! | INVARIANT-2 | Rejection needs a non-empty reason | `domain/record.rs` - `apply_review()` |
//! | INVARIANT-3 | `verified`/`rejected` are terminal | `domain/status.rs` - `is_terminal()` |
//! | INVARIANT-4 | Failed transition leaves record untouched | `ports/outbound.rs` - `update()` contract |
//! | INVARIANT-5 | Case status is derived, never stored | `domain/case.rs` - `aggregate()` |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryDocumentStore;
pub use domain::*;
pub use ports::{DocumentStore, VerificationStatusApi};
pub use service::VerificationStatusService;

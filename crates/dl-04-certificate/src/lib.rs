//! # Certificate Subsystem
//!
//! **Subsystem ID:** 4
//!
//! Packages where and when a document was sealed, together with a live
//! chain-integrity verdict, into a record a third-party verifier can read.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | No certificate for unsealed documents | `service.rs` - `generate()` |
//! | INVARIANT-2 | Integrity evaluated at issue time | `service.rs` - fresh `validate_chain()` |
//! | INVARIANT-3 | Fresh certificate id per issue | `domain/certificate.rs` |

pub mod domain;
pub mod service;

pub use domain::{Certificate, CertificateCheck, ChainIntegrity};
pub use service::CertificateGenerator;

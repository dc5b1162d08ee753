//! # Ports Layer
//!
//! - `inbound.rs` - `VerificationStatusApi` used by the runtime
//! - `outbound.rs` - `DocumentStore` persistence port

pub mod inbound;
pub mod outbound;

pub use inbound::VerificationStatusApi;
pub use outbound::DocumentStore;

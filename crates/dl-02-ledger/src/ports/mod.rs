//! # Ports Layer
//!
//! - `inbound.rs` - Read API exposed to the verifier and certificate issuer
//! - `outbound.rs` - The pending-transaction source the sealer drains

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::PendingTransactionSource;

//! # Ports Layer - Transaction Pool
//!
//! - `inbound`: TransactionPoolApi (driving port)

pub mod inbound;

pub use inbound::TransactionPoolApi;

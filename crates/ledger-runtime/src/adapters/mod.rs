//! # Adapters
//!
//! Port implementations connecting subsystems.

mod pool_source;

pub use pool_source::PoolSource;

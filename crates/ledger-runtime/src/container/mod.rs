//! # Subsystem Container
//!
//! Configuration plus the wired subsystem instances.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, LedgerConfig, SealingMode};
pub use subsystems::SubsystemContainer;

//! # Domain Layer - Transaction Pool
//!
//! - `entities`: PoolConfig
//! - `pool`: TransactionPool staging list
//! - `value_objects`: PoolStatus
//! - `errors`: PoolError enumeration

pub mod entities;
pub mod errors;
pub mod pool;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use pool::*;
pub use value_objects::*;

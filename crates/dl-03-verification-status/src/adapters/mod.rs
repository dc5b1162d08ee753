//! Adapters for the outbound ports

mod memory;

pub use memory::InMemoryDocumentStore;

//! Code store implementations

pub mod memory;

pub use memory::InMemoryCodeStore;

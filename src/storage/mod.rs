//! Storage backends for the contact record store

pub mod in_memory;

pub use in_memory::InMemoryContactStore;

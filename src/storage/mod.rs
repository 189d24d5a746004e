//! Local storage
//!
//! This module provides the persistence layer:
//! - Raw key-value backends (file-backed and in-memory)
//! - A typed adapter reading and writing whole collections

pub mod backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use store::Store;

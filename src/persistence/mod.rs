//! Sequence persistence over a key-value collaborator
//!
//! Features:
//! - `KeyValueStore` seam (LocalStorage on web, in-memory for tests/native)
//! - Plain-text value under one fixed key, compatible with earlier saves
//! - Explicit load/save checkpoints, never written on every edit

pub mod kv;
pub mod store;

pub use kv::{KeyValueStore, MemoryStore};
pub use store::SequenceStore;

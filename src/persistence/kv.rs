//! Key-value storage seam

use std::collections::HashMap;

use crate::error::{PredictorError, Result};

/// A string key-value store with fallible, all-or-nothing operations
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store, used natively, in tests, and when LocalStorage is off
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Simulate an unreadable store
    pub fail_reads: bool,
    /// Simulate a full or unavailable store on writes
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in for a missing persistent store: reads find nothing, writes fail
    pub fn unavailable() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(PredictorError::storage("store is unreadable"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PredictorError::storage("persistent storage unavailable"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

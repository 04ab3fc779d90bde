//! Load/save of the sequence under a fixed key

use crate::error::Result;
use crate::sequence::Sequence;

use super::kv::KeyValueStore;

/// Key the sequence has always been stored under
pub const DEFAULT_SEQUENCE_KEY: &str = "userInputString";

/// Persists one `Sequence` through a `KeyValueStore`
#[derive(Debug)]
pub struct SequenceStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SequenceStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SEQUENCE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored sequence, or an empty one if nothing was saved
    pub fn load(&self) -> Result<Sequence> {
        match self.store.get(&self.key)? {
            Some(text) if !text.is_empty() => {
                let sequence = Sequence::parse(&text)?;
                log::info!("Loaded sequence from {:?} ({} symbols)", self.key, sequence.len());
                Ok(sequence)
            }
            _ => {
                log::info!("No stored sequence, starting empty");
                Ok(Sequence::new())
            }
        }
    }

    /// Overwrite the stored sequence
    pub fn save(&mut self, sequence: &Sequence) -> Result<()> {
        self.store.set(&self.key, sequence.as_str())?;
        log::info!("Sequence saved ({} symbols)", sequence.len());
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

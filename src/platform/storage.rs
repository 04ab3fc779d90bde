//! LocalStorage-backed key-value store (WASM only)

use crate::error::{PredictorError, Result};
use crate::persistence::KeyValueStore;

/// Thin wrapper over the window's `localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's LocalStorage, failing if it is disabled
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| PredictorError::storage("no window"))?
            .local_storage()
            .map_err(|e| PredictorError::storage(format!("{:?}", e)))?
            .ok_or_else(|| PredictorError::storage("LocalStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| PredictorError::storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PredictorError::storage(format!("{:?}", e)))
    }
}

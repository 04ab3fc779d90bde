//! Predictor settings and preferences
//!
//! Persisted separately from the sequence, as JSON in the same store.

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use crate::persistence::KeyValueStore;
use crate::persistence::store::DEFAULT_SEQUENCE_KEY;
use crate::predict::WindowSize;

/// Predictor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Required query length
    pub window_size: WindowSize,
    /// Storage key the sequence lives under
    pub sequence_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: WindowSize::default(),
            sequence_key: DEFAULT_SEQUENCE_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "tde_predictor_settings";

    /// Load settings, falling back to defaults on a missing or corrupt entry
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let json = serde_json::to_string(self).map_err(PredictorError::storage)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

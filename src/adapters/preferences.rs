//! Preference stores.
//!
//! `JsonFilePreferences` keeps a flat JSON object on disk so the stored theme
//! survives between runs; `MemoryPreferences` is the throwaway variant.

use crate::core::{PreferenceStore, Result};
use crate::utils::error::CareBridgeError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // 壞掉的檔案直接覆寫，否則偏好永遠存不回去
        let mut items = self.load_all().unwrap_or_else(|e| {
            tracing::warn!(
                "Discarding unreadable preferences in {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        });
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, serde_json::to_string_pretty(&items)?)?;
        tracing::debug!("Saved preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        Self {
            items: Mutex::new(BTreeMap::from([(key.to_string(), value.to_string())])),
        }
    }

    fn items(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| CareBridgeError::PreferenceError {
                message: e.to_string(),
            })
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

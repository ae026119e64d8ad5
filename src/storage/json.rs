//! JSON file-based vault backend.
//!
//! Stores the key/value entries in a single human-readable JSON file,
//! using atomic writes (write-to-temp + rename) to prevent corruption on
//! crashes. The whole dataset is held in memory and flushed on every
//! mutation; with two session keys that is effectively free.

use crate::domain::error::{DealflowError, Result};
use crate::storage::vault::Vault;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// On-disk container format.
///
/// Versioned so the layout can be migrated later without guessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VaultData {
    version: u32,

    #[serde(default)]
    entries: HashMap<String, String>,
}

impl Default for VaultData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file vault.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "auth-user": "{\"id\":\"1\",...}",
///     "auth-session-expiry": "2026-08-24T10:00:00+00:00"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonVault {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory cache, loaded on creation.
    data: VaultData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonVault {
    /// Creates or opens a JSON vault.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON vault");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            VaultData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "vault initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<VaultData> {
        let contents = std::fs::read_to_string(path)?;
        let data: VaultData = serde_json::from_str(&contents)
            .map_err(|e| DealflowError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded vault data"
        );

        Ok(data)
    }

    /// Saves vault data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left in a corrupt state even if the process
    /// crashes mid-write.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving vault data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DealflowError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        Ok(())
    }
}

impl Vault for JsonVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("vault_set", key = %key).entered();
        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("vault_remove", key = %key).entered();
        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonVault {
    /// Flushes unsaved data on drop, in case a save was skipped.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save vault on drop");
            }
        }
    }
}

//! In-memory vault backend for tests and demos.

use crate::domain::error::Result;
use crate::storage::vault::Vault;
use std::collections::HashMap;

/// Vault backed by a plain `HashMap`. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryVault {
    entries: HashMap<String, String>,
}

impl MemoryVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds an entry, for simulating a previous session at startup.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// True when nothing is stored. Handy for asserting cleanup in tests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Vault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

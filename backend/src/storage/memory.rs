use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::PreferenceStorage;

/// Preference store that forgets everything when dropped
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for InMemoryPreferenceStore {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Preference store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Preference store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

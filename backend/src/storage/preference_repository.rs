//! # YAML Preference Repository
//!
//! Stores user preferences in a single `preferences.yaml` file at the root of
//! the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! preferences:
//!   theme: dark
//! updated_at: "2025-01-21T19:35:00+00:00"
//! ```
//!
//! Writes go to a temp file first and are renamed into place.

use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::connection::FileConnection;
use super::traits::PreferenceStorage;

const PREFERENCES_FILE: &str = "preferences.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
    #[serde(default)]
    updated_at: Option<String>,
}

/// File-backed preference storage
#[derive(Debug)]
pub struct YamlPreferenceRepository {
    connection: FileConnection,
    // serializes read-modify-write cycles on the file
    write_lock: Mutex<()>,
}

impl YamlPreferenceRepository {
    pub fn new(connection: FileConnection) -> Self {
        Self {
            connection,
            write_lock: Mutex::new(()),
        }
    }

    fn preferences_path(&self) -> PathBuf {
        self.connection.file_path(PREFERENCES_FILE)
    }

    fn load(&self) -> Result<PreferencesFile> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(PreferencesFile::default());
        }

        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: PreferencesFile = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded {} preferences from {:?}", file.preferences.len(), path);
        Ok(file)
    }

    fn save(&self, file: &PreferencesFile) -> Result<()> {
        let path = self.preferences_path();
        let base_dir = self.connection.base_directory();
        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
        }

        let yaml_content = serde_yaml::to_string(file)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved preferences to {:?}", path);
        Ok(())
    }
}

impl PreferenceStorage for YamlPreferenceRepository {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.preferences.get(key).cloned())
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("Preference file lock poisoned"))?;

        let mut file = self.load()?;
        file.preferences.insert(key.to_string(), value.to_string());
        file.updated_at = Some(Utc::now().to_rfc3339());
        self.save(&file)
    }
}

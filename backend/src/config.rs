use anyhow::{anyhow, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::Role;
use std::path::PathBuf;

use crate::domain::page_router::DEFAULT_ROUTE;

pub const DATA_DIR_ENV: &str = "FIN_DATA_DIR";
pub const ROLE_ENV: &str = "FIN_ROLE";
pub const PREFERS_DARK_ENV: &str = "FIN_PREFERS_DARK";

/// Startup configuration for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Directory holding `preferences.yaml`
    pub data_directory: PathBuf,
    #[serde(default)]
    pub initial_role: Role,
    /// Used for the theme when no preference has been saved yet
    #[serde(default)]
    pub system_prefers_dark: bool,
    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

fn default_initial_route() -> String {
    DEFAULT_ROUTE.to_string()
}

impl BackendConfig {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            initial_role: Role::default(),
            system_prefers_dark: false,
            initial_route: default_initial_route(),
        }
    }

    /// Build a config from the environment.
    ///
    /// The data directory is `$FIN_DATA_DIR`, otherwise `~/Documents/Fin`.
    /// Malformed role or theme overrides are logged and ignored.
    pub fn from_env() -> Result<Self> {
        let data_directory = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_directory()?,
        };
        info!("Using data directory: {}", data_directory.display());

        let mut config = Self::new(data_directory);

        if let Ok(value) = std::env::var(ROLE_ENV) {
            match value.parse::<Role>() {
                Ok(role) => config.initial_role = role,
                Err(e) => warn!("Ignoring {}: {}", ROLE_ENV, e),
            }
        }

        if let Ok(value) = std::env::var(PREFERS_DARK_ENV) {
            match value.trim().parse::<bool>() {
                Ok(prefers_dark) => config.system_prefers_dark = prefers_dark,
                Err(_) => warn!("Ignoring {}: expected true or false, got '{}'", PREFERS_DARK_ENV, value),
            }
        }

        Ok(config)
    }
}

fn default_data_directory() -> Result<PathBuf> {
    if let Some(documents) = dirs::document_dir() {
        return Ok(documents.join("Fin"));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home.join("Documents").join("Fin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = BackendConfig::new("/tmp/fin");
        assert_eq!(config.data_directory, PathBuf::from("/tmp/fin"));
        assert_eq!(config.initial_role, Role::Admin);
        assert!(!config.system_prefers_dark);
        assert_eq!(config.initial_route, "dashboard");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: BackendConfig = serde_json::from_str(r#"{"data_directory": "/data"}"#).unwrap();
        assert_eq!(config, BackendConfig::new("/data"));

        let config: BackendConfig =
            serde_json::from_str(r#"{"data_directory": "/data", "initial_role": "normal"}"#).unwrap();
        assert_eq!(config.initial_role, Role::Normal);
    }
}

use anyhow::{Context, Result};
use log::{info, warn};
use shared::ThemeMode;
use std::sync::Arc;

use crate::storage::PreferenceStorage;

/// Preference key the theme flag is stored under
pub const THEME_KEY: &str = "theme";

/// Service for the application-wide light/dark theme flag
#[derive(Clone)]
pub struct ThemeService {
    storage: Arc<dyn PreferenceStorage>,
    mode: ThemeMode,
}

impl ThemeService {
    /// Load the saved theme, falling back to the system preference when no
    /// valid value has been stored
    pub fn load(storage: Arc<dyn PreferenceStorage>, system_prefers_dark: bool) -> Result<Self> {
        let saved = storage
            .get_preference(THEME_KEY)
            .context("Failed to read theme preference")?;

        let system_mode = if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };

        let mode = match saved.as_deref() {
            Some(value) => ThemeMode::parse(value).unwrap_or_else(|| {
                warn!("Ignoring unrecognised theme '{}', using system preference", value);
                system_mode
            }),
            None => system_mode,
        };

        info!("🎨 Theme loaded: {}", mode.as_str());
        Ok(Self { storage, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Persist and apply a theme
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.storage
            .set_preference(THEME_KEY, mode.as_str())
            .context("Failed to save theme preference")?;
        self.mode = mode;
        info!("🎨 Theme set to {}", mode.as_str());
        Ok(())
    }

    /// Switch between light and dark, returning the new mode
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }
}

//! Game settings and preferences
//!
//! Read-only input: LocalStorage on the web, an optional JSON file natively.
//! Anything unreadable falls back to the defaults with a warning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PLAYER_RADIUS, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::Playfield;

/// Problems loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playfield {width}x{height} cannot hold the player")]
    InvalidPlayfield { width: f32, height: f32 },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Draw species names above creatures
    pub show_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            seed: None,
            show_labels: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The player must fit inside the playfield
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min = PLAYER_RADIUS * 2.0;
        let fits = |v: f32| v.is_finite() && v >= min;
        if fits(self.width) && fits(self.height) {
            Ok(())
        } else {
            Err(SettingsError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn playfield(&self) -> Playfield {
        Playfield {
            width: self.width,
            height: self.height,
        }
    }

    /// Seed to use for a new session
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "food_chain_settings";

    /// Environment variable naming a native settings file
    pub const ENV_VAR: &'static str = "FOOD_CHAIN_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `FOOD_CHAIN_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(std::path::Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_field() {
        let settings = Settings::default();
        assert_eq!(settings.playfield(), Playfield::default());
        assert!(settings.validate().is_ok());
        assert_eq!(settings.seed_or(77), 77);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 12, "show_labels": false }"#).unwrap();
        assert_eq!(settings.seed, Some(12));
        assert!(!settings.show_labels);
        assert_eq!(settings.width, PLAYFIELD_WIDTH);
        assert_eq!(settings.seed_or(77), 12);
    }

    #[test]
    fn test_rejects_tiny_playfield() {
        let err = Settings::from_json(r#"{ "width": 40.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidPlayfield { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_file(std::path::Path::new("/nonexistent/food_chain.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}

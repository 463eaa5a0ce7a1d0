//! Persistence of [`HudSettings`] through confy

use std::path::{Path, PathBuf};

use rpghud_types::HudSettings;
use tracing::warn;

use crate::error::ConfigError;

pub const APP_NAME: &str = "rpghud";
pub const CONFIG_NAME: &str = "settings";

/// Loading and saving for the HUD settings file
pub trait HudSettingsExt: Sized {
    /// Load from the default location, falling back to defaults on any failure
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl HudSettingsExt for HudSettings {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load HUD settings, using defaults");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpghud_types::{ElementPosition, ElementType};

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("rpghud-settings-{}-{name}", std::process::id()))
            .join("settings.toml")
    }

    #[test]
    fn test_save_then_load_from_path() {
        let path = temp_settings_path("round-trip");
        let mut settings = HudSettings::default();
        settings.show_outline = false;
        let health = settings.element_mut(ElementType::Health);
        health.position = Some(ElementPosition { x: 12, y: 34 });
        health.scale = 1.5;
        health.color = Some(0x00FF00);
        settings.element_mut(ElementType::Experience).enabled = false;

        settings.save_to(&path).unwrap();
        let loaded = HudSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_load_from_missing_file_creates_defaults() {
        let path = temp_settings_path("missing");
        let loaded = HudSettings::load_from(&path).unwrap();
        assert_eq!(loaded, HudSettings::default());
        assert!(path.exists());

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_load_from_corrupt_file_is_an_error() {
        let path = temp_settings_path("corrupt");
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "show_outline = [not toml").unwrap();

        let result = HudSettings::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Load(_))));

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::models::settings::Settings;

/// Loads and stores [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        Ok(settings.sanitized())
    }

    /// Like [`load`](Self::load), but never fails.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if settings.clone().sanitized() != *settings {
            return Err(anyhow!("Invalid settings: {:?}", settings));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.save(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ui::ViewType;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("conf").join("settings.toml"));

        let settings = Settings {
            hour_height: 48.0,
            initial_view: ViewType::Month,
            ..Settings::default()
        };
        service.save(&settings).unwrap();
        assert_eq!(service.load().unwrap(), settings);

        service.reset().unwrap();
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "hour_height = \"tall\"").unwrap();

        let service = SettingsService::new(&path);
        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_out_of_range_values_are_sanitized_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "hour_height = 0.0\ndefault_scroll_hour = 30\n").unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let bad = Settings {
            default_scroll_hour: 99,
            ..Settings::default()
        };
        assert!(service.save(&bad).is_err());
        assert!(!service.path().exists());
    }
}

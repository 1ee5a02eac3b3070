use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::mapper::{settings_to_toml, toml_to_settings};

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the working
    /// directory when none can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "WeekdayRangePicker") {
            proj_dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file yields defaults
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = toml_to_settings(&text)
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let text = settings_to_toml(settings)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        let default_settings = Settings::default();
        self.update(&default_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE_NAME));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup_test_service();

        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.theme = "Dark".to_string();
        settings.lookback_presets = vec![7, 14, 30];

        let result = service.update(&settings);
        assert!(result.is_ok());

        let updated = service.get().unwrap();
        assert_eq!(updated.theme, "Dark");
        assert_eq!(updated.lookback_presets, vec![7, 14, 30]);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.year_window = 0;

        let result = service.update(&settings);
        assert!(result.is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "lookback_presets = []\n").unwrap();

        assert!(service.get().is_err());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.theme = "Dark".to_string();
        settings.year_window = 2;
        service.update(&settings).unwrap();

        let result = service.reset();
        assert!(result.is_ok());

        let reset_settings = service.get().unwrap();
        assert_eq!(reset_settings, Settings::default());
    }
}

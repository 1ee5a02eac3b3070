use crate::models::settings::Settings;
use anyhow::{Context, Result};

pub fn toml_to_settings(text: &str) -> Result<Settings> {
    toml::from_str(text).context("Failed to parse settings TOML")
}

pub fn settings_to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(toml_to_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_serialized_settings_read_back() {
        let settings = Settings {
            theme: "Dark".to_string(),
            year_window: 3,
            lookback_presets: vec![5, 14],
        };
        let text = settings_to_toml(&settings).unwrap();
        assert!(text.contains("year_window = 3"));
        assert_eq!(toml_to_settings(&text).unwrap(), settings);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(toml_to_settings("year_window = \"ten\"").is_err());
    }
}

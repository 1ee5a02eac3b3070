// Settings module
// Ambient preferences read from settings.toml; the picked range is never stored here

use serde::{Deserialize, Serialize};

use crate::services::range::DEFAULT_YEAR_WINDOW;

pub const THEME_LIGHT: &str = "Light";
pub const THEME_DARK: &str = "Dark";
pub const THEME_SYSTEM: &str = "System";

const MAX_YEAR_WINDOW: u16 = 100;
/// Ten years of days
pub const MAX_LOOKBACK_DAYS: u32 = 3660;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Years listed on each side of the current year in the year dropdown.
    pub year_window: u16,
    /// Lengths offered as "Last N Days" shortcuts.
    pub lookback_presets: Vec<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: THEME_LIGHT.to_string(),
            year_window: DEFAULT_YEAR_WINDOW,
            lookback_presets: vec![7, 30],
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if ![THEME_LIGHT, THEME_DARK, THEME_SYSTEM]
            .iter()
            .any(|name| name.eq_ignore_ascii_case(&self.theme))
        {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        if self.year_window == 0 || self.year_window > MAX_YEAR_WINDOW {
            return Err(format!(
                "Year window must be between 1 and {}, got {}",
                MAX_YEAR_WINDOW, self.year_window
            ));
        }

        if self.lookback_presets.is_empty() {
            return Err("At least one lookback preset is required".to_string());
        }

        if self.lookback_presets.contains(&0) {
            return Err("Lookback presets must be at least one day".to_string());
        }

        if let Some(days) = self
            .lookback_presets
            .iter()
            .find(|days| **days > MAX_LOOKBACK_DAYS)
        {
            return Err(format!(
                "Lookback presets must be at most {} days, got {}",
                MAX_LOOKBACK_DAYS, days
            ));
        }

        Ok(())
    }

    pub fn uses_system_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case(THEME_SYSTEM)
    }
}

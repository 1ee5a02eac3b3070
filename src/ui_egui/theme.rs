//! Theme module for the range picker window
//!
//! Defines the PickerTheme structure and resolves it from the settings theme
//! name, following the system preference when asked to.

use egui::Color32;

use crate::models::settings::{Settings, THEME_DARK};

/// Colors used by the picker form and results
#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub app_background: Color32,

    /// Input and button background color
    pub field_background: Color32,

    /// Hovered/active input background color
    pub field_highlight: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Text color for the selected range line
    pub range_text: Color32,

    /// Text color for weekend dates in the results
    pub weekend_text: Color32,
}

impl PickerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            field_background: Color32::from_rgb(255, 255, 255),
            field_highlight: Color32::from_rgb(230, 240, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            range_text: Color32::from_rgb(30, 80, 150),
            weekend_text: Color32::from_rgb(180, 40, 40),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            field_background: Color32::from_rgb(40, 40, 40),
            field_highlight: Color32::from_rgb(50, 60, 80),
            text_primary: Color32::from_rgb(240, 240, 240),
            range_text: Color32::from_rgb(100, 180, 255),
            weekend_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Resolve the theme named in settings; "System" follows the OS preference
    pub fn from_settings(settings: &Settings) -> Self {
        let theme_name = if settings.uses_system_theme() {
            match dark_light::detect() {
                dark_light::Mode::Dark => THEME_DARK.to_string(),
                dark_light::Mode::Light | dark_light::Mode::Default => settings.theme.clone(),
            }
        } else {
            settings.theme.clone()
        };

        Self::from_name(&theme_name)
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(THEME_DARK) {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.inactive.bg_fill = self.field_background;
        visuals.widgets.hovered.bg_fill = self.field_highlight;
        visuals.widgets.active.bg_fill = self.field_highlight;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = PickerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = PickerTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert!(PickerTheme::from_name("dark").is_dark);
        assert!(PickerTheme::from_name("DARK").is_dark);
        assert!(!PickerTheme::from_name("Light").is_dark);
    }

    #[test]
    fn test_from_settings_uses_named_theme() {
        let settings = Settings {
            theme: "Dark".to_string(),
            ..Settings::default()
        };
        assert_eq!(PickerTheme::from_settings(&settings), PickerTheme::dark());
        assert_eq!(PickerTheme::from_settings(&Settings::default()), PickerTheme::light());
    }
}

use super::state::AppState;
use super::RangePickerApp;
use crate::models::settings::{Settings, THEME_DARK, THEME_LIGHT};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::{Clock, SystemClock};

impl RangePickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::new(SettingsService::default_path());
        Self::with_services(cc, settings_service, Box::new(SystemClock))
    }

    pub fn with_services(
        cc: &eframe::CreationContext<'_>,
        settings_service: SettingsService,
        clock: Box<dyn Clock>,
    ) -> Self {
        let settings = load_settings_or_default(&settings_service);
        log::info!(
            "Loaded settings: theme={}, year_window={}, lookback_presets={:?}",
            settings.theme,
            settings.year_window,
            settings.lookback_presets
        );

        let active_theme = PickerTheme::from_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        let state = AppState::new(clock.today());

        Self {
            settings_service,
            settings,
            active_theme,
            clock,
            state,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Weekday Date Range");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.active_theme.is_dark {
                        "☀ Light"
                    } else {
                        "🌙 Dark"
                    };
                    if ui.small_button(label).on_hover_text("Switch theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
            ui.add_space(8.0);

            self.render_range_form(ui);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            self.render_results(ui);
        });
    }

    /// Toggle between the light and dark theme and remember the choice.
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        let next = if self.active_theme.is_dark {
            PickerTheme::light()
        } else {
            PickerTheme::dark()
        };
        next.apply_to_context(ctx);
        self.settings.theme = if next.is_dark { THEME_DARK } else { THEME_LIGHT }.to_string();
        self.active_theme = next;

        if let Err(e) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

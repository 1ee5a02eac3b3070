mod lifecycle;
mod state;
mod views;

use self::state::AppState;
use crate::models::settings::Settings;
use crate::services::range::{RangeError, RangeEvent};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::PickerTheme;
use crate::utils::date::Clock;

const MIN_ROOT_WIDTH: f32 = 420.0;
const MIN_ROOT_HEIGHT: f32 = 360.0;

pub struct RangePickerApp {
    settings_service: SettingsService,
    /// Preferences loaded at start-up
    settings: Settings,
    /// Currently applied theme colors
    active_theme: PickerTheme,
    clock: Box<dyn Clock>,
    /// Range state machine and form buffers
    state: AppState,
}

impl eframe::App for RangePickerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl RangePickerApp {
    pub fn min_inner_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }

    /// Feed one user event through the range state machine.
    ///
    /// A rejected event leaves the current state in place. Weekend picks are
    /// dropped without any message.
    fn dispatch(&mut self, event: RangeEvent) {
        let result = self.state.apply(event, self.clock.as_ref());
        self.log_outcome(&event, result);
    }

    fn apply_last_days(&mut self, days: u32) {
        let result = self.state.apply_last_days(days, self.clock.as_ref());
        self.log_outcome(&format!("last {} days", days), result);
    }

    fn log_outcome(&self, what: &dyn std::fmt::Debug, result: Result<(), RangeError>) {
        match result {
            Ok(()) => log::debug!("Applied {:?}: {:?}", what, self.state.range.range),
            Err(RangeError::WeekendAnchor(date)) => {
                log::debug!("Ignoring weekend pick {}", date);
            }
            Err(err) => log::warn!("Rejected {:?}: {}", what, err),
        }
    }

    /// Snapshot the current range for the results panel, as "Get Selected Range" does.
    fn capture_report(&mut self) {
        self.state.report = self.state.range.report();
        match &self.state.report {
            Some(report) => match serde_json::to_string(report) {
                Ok(json) => log::info!("Selected range: {}", json),
                Err(err) => log::error!("Failed to serialize range report: {}", err),
            },
            None => log::debug!("Get Selected Range pressed without a complete range"),
        }
    }
}

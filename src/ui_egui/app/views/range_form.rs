//! Year/month dropdowns, date inputs and shortcut buttons.

use super::super::state::DateInputState;
use super::super::RangePickerApp;
use crate::services::range::{month_name, year_options, RangeEvent, MONTH_NAMES};
use chrono::{Datelike, NaiveDate};
use egui_extras::DatePickerButton;

/// What the user did with one date input this frame
enum DateInputAction {
    None,
    Picked(NaiveDate),
    /// Typed text that is not a `YYYY-MM-DD` date
    Unparsable,
}

impl RangePickerApp {
    pub(in crate::ui_egui) fn render_range_form(&mut self, ui: &mut egui::Ui) {
        let current_year = self.clock.today().year();

        egui::Grid::new("range_form_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Year:");
                self.render_year_select(ui, current_year);
                ui.end_row();

                ui.label("Month:");
                self.render_month_select(ui);
                ui.end_row();

                ui.label("Start Date:");
                let anchor = self.state.range.range.start;
                let action = render_date_input(ui, "range_start", &mut self.state.start_input, anchor);
                self.handle_date_input(action);
                ui.end_row();

                ui.label("End Date:");
                let anchor = self.state.range.range.end;
                let action = render_date_input(ui, "range_end", &mut self.state.end_input, anchor);
                self.handle_date_input(action);
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("Predefined Ranges:");
            let presets = self.settings.lookback_presets.clone();
            for days in presets {
                if ui.button(format!("Last {} Days", days)).clicked() {
                    self.apply_last_days(days);
                }
            }

            ui.separator();

            if ui.button("Clear").on_hover_text("Forget both dates").clicked() {
                self.dispatch(RangeEvent::Clear);
            }
        });
    }

    fn render_year_select(&mut self, ui: &mut egui::Ui, current_year: i32) {
        let selected = self.state.range.selected_year;
        let mut picked = None;

        egui::ComboBox::from_id_source("range_year")
            .width(80.0)
            .selected_text(format!("{}", selected))
            .show_ui(ui, |ui| {
                for year in year_options(current_year, self.settings.year_window) {
                    if ui.selectable_label(year == selected, format!("{}", year)).clicked() {
                        picked = Some(year);
                    }
                }
            });

        if let Some(year) = picked.filter(|year| *year != selected) {
            self.dispatch(RangeEvent::SetYear(year));
        }
    }

    fn render_month_select(&mut self, ui: &mut egui::Ui) {
        let selected = self.state.range.selected_month();
        let mut picked = None;

        egui::ComboBox::from_id_source("range_month")
            .width(110.0)
            .selected_text(selected.and_then(month_name).unwrap_or_default())
            .show_ui(ui, |ui| {
                for (month, name) in (1u32..).zip(MONTH_NAMES) {
                    if ui.selectable_label(selected == Some(month), name).clicked() {
                        picked = Some(month);
                    }
                }
            });

        if let Some(month) = picked.filter(|month| Some(*month) != selected) {
            self.dispatch(RangeEvent::SetMonth(month));
        }
    }

    fn handle_date_input(&mut self, action: DateInputAction) {
        match action {
            DateInputAction::None => {}
            DateInputAction::Picked(date) => self.dispatch(RangeEvent::Select(date)),
            DateInputAction::Unparsable => {
                log::debug!("Ignoring date text that is not YYYY-MM-DD");
                self.state.sync_inputs(self.clock.today());
            }
        }
    }
}

/// ISO text box plus calendar button for one range anchor.
///
/// Only reports a pick when it differs from `anchor`, the value the input
/// currently stands for.
fn render_date_input(
    ui: &mut egui::Ui,
    id: &str,
    input: &mut DateInputState,
    anchor: Option<NaiveDate>,
) -> DateInputAction {
    ui.horizontal(|ui| {
        let mut action = DateInputAction::None;

        let text_response = ui.add(
            egui::TextEdit::singleline(&mut input.text)
                .id_source(format!("{}_text", id))
                .desired_width(96.0)
                .hint_text("YYYY-MM-DD"),
        );
        if text_response.changed() {
            input.dirty = true;
        }
        if text_response.lost_focus() && input.dirty {
            input.dirty = false;
            action = match input.parsed_text() {
                Some(date) if Some(date) != anchor => DateInputAction::Picked(date),
                Some(_) => DateInputAction::None,
                None if input.text.trim().is_empty() && anchor.is_none() => DateInputAction::None,
                None => DateInputAction::Unparsable,
            };
        }

        let picker_response = ui.add(
            DatePickerButton::new(&mut input.picker_date).id_source(&format!("{}_picker", id)),
        );
        if picker_response.changed() && Some(input.picker_date) != anchor {
            action = DateInputAction::Picked(input.picker_date);
        }

        action
    })
    .inner
}

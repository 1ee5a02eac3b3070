//! Selected range summary and the "Get Selected Range" report.

use super::super::RangePickerApp;
use crate::models::date_range::RangeReport;
use crate::utils::date::format_iso;
use egui::RichText;
use egui_extras::{Column, TableBuilder};

impl RangePickerApp {
    pub(in crate::ui_egui) fn render_results(&mut self, ui: &mut egui::Ui) {
        if let Some((start, end)) = self.state.range.range.bounds() {
            ui.label(
                RichText::new(format!(
                    "Selected Date Range: {} to {}",
                    format_iso(start),
                    format_iso(end)
                ))
                .color(self.active_theme.range_text),
            );
            if !self.state.range.range.is_ordered() {
                ui.weak("End date is before start date; no weekend dates are listed");
            }
        }

        if !self.state.range.weekends.is_empty() {
            let weekends = self
                .state
                .range
                .weekends
                .iter()
                .copied()
                .map(format_iso)
                .collect::<Vec<_>>()
                .join(", ");
            ui.label(
                RichText::new(format!("Weekend Dates: {}", weekends))
                    .color(self.active_theme.weekend_text),
            );
        }

        ui.add_space(8.0);
        if ui
            .button("Get Selected Range")
            .on_hover_text("Report the range and the weekend dates inside it")
            .clicked()
        {
            self.capture_report();
        }

        if let Some(report) = &self.state.report {
            ui.add_space(8.0);
            render_report(ui, report, self.active_theme.weekend_text);
        }
    }
}

fn render_report(ui: &mut egui::Ui, report: &RangeReport, weekend_color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.strong(report.range_label());
        if ui.small_button("Copy JSON").clicked() {
            match serde_json::to_string_pretty(report) {
                Ok(json) => ui.output_mut(|o| o.copied_text = json),
                Err(err) => log::error!("Failed to serialize range report: {}", err),
            }
        }
    });

    if report.weekends.is_empty() {
        ui.label(RichText::new("No weekend dates in this range").italics());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(160.0)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(32.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Weekend date");
            });
        })
        .body(|mut body| {
            for (index, date) in report.weekends.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!("{}", index + 1));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(date).color(weekend_color));
                    });
                });
            }
        });
}

// Weekday Range Picker Application
// Main entry point

use weekday_range_picker::ui_egui::RangePickerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Weekday Range Picker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Weekday Range Picker")
            .with_inner_size([560.0, 520.0])
            .with_min_inner_size(RangePickerApp::min_inner_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Weekday Range Picker",
        options,
        Box::new(|cc| Ok(Box::new(RangePickerApp::new(cc)))),
    )
}

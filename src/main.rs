// Calendar Panels
// Demo window for the event modal and label filter panel

use calendar_panels::services::settings::load_settings_or_default;
use calendar_panels::ui_egui::CalendarApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Panels");

    let settings = load_settings_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Panels",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {e}"))
}

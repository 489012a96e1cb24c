// Rust Planner Application
// Main entry point

use rust_planner::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Planner")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Planner",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
}

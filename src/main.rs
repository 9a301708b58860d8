#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use project_dashboard::logging::init_logging;
use project_dashboard::AppSettings;

fn main() -> eframe::Result<()> {
    let settings_path = AppSettings::default_path();
    let settings = AppSettings::load(&settings_path);
    init_logging(&settings.log_filter);
    tracing::info!(path = %settings_path.display(), role = %settings.default_role, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Project Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Project Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(app::DashboardApp::new(cc, settings, settings_path)))),
    )
}

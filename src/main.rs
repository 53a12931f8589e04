use eframe::egui;
use ova_bioestadistica::app::OvaApp;
use ova_bioestadistica::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OVA Bioestadística",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the generated PNG charts.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(OvaApp::new(cc, config)))
        }),
    )
}

mod app;
mod data;
mod state;
mod ui;

use app::DropTallyApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([540.0, 380.0])
            .with_min_inner_size([380.0, 260.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Drop Tally – Count Summariser",
        options,
        Box::new(|_cc| Ok(Box::new(DropTallyApp::default()))),
    )
}

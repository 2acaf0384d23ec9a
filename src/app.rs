use eframe::egui;

use crate::state::AppState;
use crate::ui::{collector, panels, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DropTallyApp {
    pub state: AppState,
}

impl eframe::App for DropTallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Files dropped anywhere on the window load a new dataset ----
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            panels::load_path(&mut self.state, &path);
        }

        // ---- Top panel: menu / status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: drop zone ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::drop_zone(ui, ctx, &self.state);
        });

        // ---- Auxiliary windows, each open while its state is Some ----
        collector::collector_window(ctx, &mut self.state);
        summary::summary_window(ctx, &mut self.state);
    }
}

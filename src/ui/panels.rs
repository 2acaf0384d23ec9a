use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        if state.dataset.is_some() && ui.button("Summarize…").clicked() {
            state.open_collector();
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            let name = state
                .source_path
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{name}: {} rows, {} columns",
                ds.len(),
                ds.column_names.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central drop zone
// ---------------------------------------------------------------------------

/// Render the central drop target with a hint label.
pub fn drop_zone(ui: &mut Ui, ctx: &egui::Context, state: &AppState) {
    let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

    let hint = if hovering {
        "Release to load the file".to_string()
    } else if let Some(ds) = &state.dataset {
        format!("{} rows loaded — drop another file to replace", ds.len())
    } else {
        "Drop a .csv, .json or .parquet file here".to_string()
    };

    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(hint).heading());
    });

    if hovering {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("drop_overlay"),
        ));
        painter.rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(96));
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load `path` and open the collector form for it.  Failures go to a
/// blocking dialog plus the status line; the collector is not opened.
pub fn load_path(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rows with columns {:?}",
                dataset.len(),
                dataset.column_names
            );
            state.set_dataset(dataset, path);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            error_dialog(&format!("Error reading data file: {e:#}"));
        }
    }
}

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Blocking error notification.  How an error is displayed lives here;
/// the loader and transformer only return typed error values.
pub fn error_dialog(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .show();
}

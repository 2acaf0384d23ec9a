use eframe::egui::{self, Context, Ui};

use crate::state::{AppState, FilterRow};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// Input-collector window
// ---------------------------------------------------------------------------

/// Render the form collecting dedup key columns, the group column, and the
/// growable list of equality filter pairs.  Open while `state.collector`
/// is Some.
pub fn collector_window(ctx: &Context, state: &mut AppState) {
    let Some(form) = &mut state.collector else {
        return;
    };

    let mut open = true;
    let mut submitted = false;

    egui::Window::new("Summarize dataset")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label("Dedup key columns (comma-separated, optional):");
            ui.text_edit_singleline(&mut form.dedup_input);

            ui.label("Column to summarize:");
            ui.text_edit_singleline(&mut form.group_input);

            ui.separator();

            for (i, filter) in form.filters.iter_mut().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Filter column:");
                    ui.add(
                        egui::TextEdit::singleline(&mut filter.column)
                            .desired_width(90.0)
                            .id_salt(("filter_column", i)),
                    );
                    ui.label("value:");
                    ui.add(
                        egui::TextEdit::singleline(&mut filter.value)
                            .desired_width(90.0)
                            .id_salt(("filter_value", i)),
                    );
                });
            }

            if ui.button("Add filter").clicked() {
                form.filters.push(FilterRow::default());
            }

            ui.separator();

            if ui.button("Confirm").clicked() {
                submitted = true;
            }
        });

    if submitted {
        if let Err(e) = state.submit_collector() {
            log::error!("Summarize failed: {e}");
            state.status_message = Some(format!("Error: {e}"));
            panels::error_dialog(&e.to_string());
        }
    }
    if !open {
        state.collector = None;
    }
}

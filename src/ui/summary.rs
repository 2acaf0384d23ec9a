use eframe::egui::{self, Context, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary-table window
// ---------------------------------------------------------------------------

/// Render the (group value, count) table plus the total row.  Open while
/// `state.summary` is Some; closing it just drops the summary.
pub fn summary_window(ctx: &Context, state: &mut AppState) {
    let Some(view) = &state.summary else {
        return;
    };

    let mut open = true;

    egui::Window::new("Summary")
        .open(&mut open)
        .default_width(280.0)
        .show(ctx, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder().at_least(140.0))
                .column(Column::auto().at_least(60.0))
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(view.group_label.as_str());
                    });
                    header.col(|ui| {
                        ui.strong("Count");
                    });
                })
                .body(|mut body| {
                    for (value, count) in &view.summary.groups {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(value.to_string());
                            });
                            row.col(|ui| {
                                ui.label(count.to_string());
                            });
                        });
                    }
                    // Aggregate row, kept under its original label.
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.strong("总和");
                        });
                        row.col(|ui| {
                            ui.strong(view.summary.total.to_string());
                        });
                    });
                });
        });

    if !open {
        state.summary = None;
    }
}

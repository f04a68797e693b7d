use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::selection::Axis;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Column panel – X / Y toggle rows and the Plot button
// ---------------------------------------------------------------------------

/// Render both axis rows followed by the Plot button.
pub fn column_panel(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    axis_row(ui, state, Axis::X, "Select X-Axis:");
    ui.add_space(4.0);
    axis_row(ui, state, Axis::Y, "Select Y-Axis:");
    ui.add_space(6.0);

    ui.vertical_centered(|ui: &mut Ui| {
        if ui.button(RichText::new("Plot").strong()).clicked() {
            // A refusal is stored in the state and shown by `plot_error_modal`.
            if let Err(e) = state.request_plot() {
                log::debug!("Plot refused: {e}");
            }
        }
    });
}

/// One horizontally scrollable row of toggles.
fn axis_row(ui: &mut Ui, state: &mut AppState, axis: Axis, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(title);
    });

    // Collect clicks first; the toggle records are borrowed while drawing.
    let mut pressed = None;
    let dataset = state.dataset.as_ref();
    ScrollArea::horizontal()
        .id_salt(("axis_row", axis == Axis::X))
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for (i, button) in state.selection.group(axis).buttons().iter().enumerate() {
                    if ui
                        .selectable_label(button.selected, button.label.as_str())
                        .on_hover_ui(|ui: &mut Ui| {
                            let nulls = dataset.map(|ds| ds.null_count(i)).unwrap_or(0);
                            ui.label(format!("{nulls} null cells"));
                        })
                        .clicked()
                    {
                        pressed = Some(i);
                    }
                }
            });
        });

    if let Some(i) = pressed {
        state.toggle(axis, i);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                ui.close_menu();
                open_file_dialog(state);
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.close_menu();
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(summary) = state.summary() {
            ui.label(summary);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV Files", &["csv"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_path(&path) {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Modal shown while a refused plot request is pending.
pub fn plot_error_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(error) = &state.plot_error else {
        return;
    };

    let mut ok_clicked = false;
    let response = egui::Modal::new(egui::Id::new("plot_error")).show(ctx, |ui: &mut Ui| {
        ui.set_width(360.0);
        ui.heading(RichText::new("Error").color(Color32::RED));
        ui.add_space(4.0);
        ui.label(error.to_string());
        ui.label(format!("Missing: {} axis", error.missing_axes()));
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ok_clicked = ui.button("OK").clicked();
        });
    });

    if ok_clicked || response.should_close() {
        state.dismiss_plot_error();
    }
}

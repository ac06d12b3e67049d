use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – date range selection
// ---------------------------------------------------------------------------

/// Render the left sidebar: dashboard header and the date-range pickers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Bike Sharing Dashboard");
    ui.separator();

    let Some((min_date, max_date)) = state.dataset.as_ref().map(|ds| (ds.min_date, ds.max_date))
    else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.strong("Date range");
    ui.add_space(2.0);

    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("From");
        changed |= ui
            .add(DatePickerButton::new(&mut state.start_date).id_salt("start_date"))
            .changed();
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("To");
        changed |= ui
            .add(DatePickerButton::new(&mut state.end_date).id_salt("end_date"))
            .changed();
    });

    if ui.small_button("Full range").clicked() {
        state.reset_range();
    }
    if changed {
        state.refilter();
    }

    ui.add_space(4.0);
    ui.small(format!(
        "Data covers {} to {}",
        min_date.format("%Y-%m-%d"),
        max_date.format("%Y-%m-%d")
    ));
    if !state.range_valid() {
        ui.colored_label(Color32::YELLOW, "Start date is after end date.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = state.source_path.is_some();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                reload(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} in range",
                ds.len(),
                state.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open rental dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_dataset(state, path);
    }
}

/// Load a dataset into the state.  A failed load keeps the previous
/// dataset and surfaces the error in the top bar.
pub fn load_dataset(state: &mut AppState, path: PathBuf) {
    match crate::data::loader::load_file(&path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rental records from {} ({} to {})",
                dataset.len(),
                path.display(),
                dataset.min_date,
                dataset.max_date
            );
            state.set_dataset(dataset, path);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn reload(state: &mut AppState) {
    if let Some(path) = state.source_path.clone() {
        load_dataset(state, path);
    }
}

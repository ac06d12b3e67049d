use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

/// Dataset picked up automatically when present in the working directory.
const DEFAULT_DATASET: &str = "all_data.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BikeDashApp {
    pub state: AppState,
}

impl Default for BikeDashApp {
    fn default() -> Self {
        let mut state = AppState::default();
        let path = Path::new(DEFAULT_DATASET);
        if path.exists() {
            panels::load_dataset(&mut state, path.to_path_buf());
        }
        Self { state }
    }
}

impl eframe::App for BikeDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: date range ----
        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::dashboard(ui, &self.state);
        });
    }
}

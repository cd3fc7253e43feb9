use eframe::egui::{self, ScrollArea, Ui};

use crate::data::pipeline::ViewBundle;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BikeshareApp {
    pub state: AppState,
}

impl BikeshareApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BikeshareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables or charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bike Rental Dashboard");
            ui.label(format!(
                "{} days match the current filters",
                self.state.bundle.filtered_rows()
            ));
            ui.separator();
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| match &self.state.bundle {
                    ViewBundle::Descriptive(bundle) => tables::descriptive(ui, bundle),
                    ViewBundle::Visualization(bundle) => plot::visualization(ui, bundle),
                });
        });
    }
}

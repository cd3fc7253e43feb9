use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::data::model::{Season, Weather};
use crate::data::pipeline::{FilterScope, ViewMode};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.date_bounds().is_none() {
        ui.label("No rental data loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Date range ----
            ui.strong("Date range");
            let mut start = state.filters.start;
            let mut end = state.filters.end;
            egui::Grid::new("date_range").num_columns(2).show(ui, |ui: &mut Ui| {
                ui.label("From");
                ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
                ui.end_row();
                ui.label("To");
                ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));
                ui.end_row();
            });
            state.set_date_range(start, end);
            if start > end {
                ui.label(
                    RichText::new("Start is after end: nothing matches.").color(Color32::YELLOW),
                );
            }
            ui.separator();

            // ---- Seasons ----
            let n_seasons = state.filters.seasons.len();
            let header = format!("Season  ({})", selection_text(n_seasons));
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("seasons")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for season in Season::ALL {
                        let mut checked = state.filters.seasons.contains(&season);
                        if ui.checkbox(&mut checked, season.label()).changed() {
                            state.toggle_season(season);
                        }
                    }
                });

            // ---- Weather ----
            let n_weathers = state.filters.weathers.len();
            let header = format!("Weather  ({})", selection_text(n_weathers));
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("weathers")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for weather in Weather::ALL {
                        let mut checked = state.filters.weathers.contains(&weather);
                        if ui.checkbox(&mut checked, weather.label()).changed() {
                            state.toggle_weather(weather);
                        }
                    }
                });

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
            ui.separator();

            // ---- View selector ----
            ui.strong("Show");
            for mode in ViewMode::ALL {
                if ui.radio(state.view_mode == mode, mode.label()).clicked() {
                    state.set_view_mode(mode);
                }
            }

            if state.filter_scope == FilterScope::Parity {
                ui.add_space(8.0);
                ui.small("Hourly trend and temperature categories use all dates.");
            }
        });
}

/// Empty selection means every category is shown.
fn selection_text(n_selected: usize) -> String {
    if n_selected == 0 {
        "all".to_string()
    } else {
        format!("{n_selected} selected")
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} days loaded, {} visible · {} hourly rows",
            state.datasets.daily.len(),
            state.bundle.filtered_rows(),
            state.datasets.hourly.len()
        ));

        if state.filters.is_unrestricted_for(&state.datasets.daily) {
            ui.label("(no filters)");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

/// Reload `day` and `hour` tables from a user-chosen folder.  On failure the
/// current data stays in place.
pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open folder with day.csv and hour.csv")
        .pick_folder();

    if let Some(dir) = folder {
        match crate::data::loader::load_from_dir(&dir) {
            Ok(datasets) => {
                log::info!(
                    "Loaded {} daily and {} hourly rows from {}",
                    datasets.daily.len(),
                    datasets.hourly.len(),
                    dir.display()
                );
                state.set_datasets(datasets);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load data folder: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

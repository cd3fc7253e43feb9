mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::BikeshareApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    let datasets = data::loader::load_datasets(&config.daily_path, &config.hourly_path)
        .context("loading rental data")?;
    if datasets.daily.is_empty() || datasets.hourly.is_empty() {
        log::warn!("Loaded an empty rental table; views will show no data");
    }
    if let Some((first, last)) = datasets.daily.date_bounds() {
        log::info!(
            "Loaded {} daily rows ({first} to {last}) and {} hourly rows",
            datasets.daily.len(),
            datasets.hourly.len()
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let state = AppState::new(datasets, config.filter_scope);
    eframe::run_native(
        "Bike Rental Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(BikeshareApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}

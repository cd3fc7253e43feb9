use chrono::NaiveDate;

use crate::data::filter::{init_filter_state, FilterState};
use crate::data::model::{Datasets, Season, Weather};
use crate::data::pipeline::{compute_view, FilterScope, ViewBundle, ViewMode};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded collections; replaced wholesale on reload, never mutated.
    pub datasets: Datasets,

    /// Active filter selection.
    pub filters: FilterState,

    pub view_mode: ViewMode,

    pub filter_scope: FilterScope,

    /// Results for the current filters and view mode (cached).
    pub bundle: ViewBundle,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(datasets: Datasets, filter_scope: FilterScope) -> Self {
        let filters = init_filter_state(&datasets.daily);
        let view_mode = ViewMode::default();
        let bundle = compute_view(&datasets, &filters, view_mode, filter_scope);
        Self {
            datasets,
            filters,
            view_mode,
            filter_scope,
            bundle,
            status_message: None,
        }
    }

    /// Ingest newly loaded collections and reset the filters to show everything.
    pub fn set_datasets(&mut self, datasets: Datasets) {
        self.filters = init_filter_state(&datasets.daily);
        self.datasets = datasets;
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the active bundle after any change.
    pub fn refilter(&mut self) {
        self.bundle = compute_view(&self.datasets, &self.filters, self.view_mode, self.filter_scope);
        log::debug!(
            "{} of {} daily rows visible ({:?})",
            self.bundle.filtered_rows(),
            self.datasets.daily.len(),
            self.view_mode
        );
    }

    /// Dataset bounds for the date pickers; `None` when nothing is loaded.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.datasets.daily.date_bounds()
    }

    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        if (start, end) != (self.filters.start, self.filters.end) {
            self.filters.start = start;
            self.filters.end = end;
            self.refilter();
        }
    }

    /// Toggle a single season in the filter.
    pub fn toggle_season(&mut self, season: Season) {
        if !self.filters.seasons.remove(&season) {
            self.filters.seasons.insert(season);
        }
        self.refilter();
    }

    /// Toggle a single weather situation in the filter.
    pub fn toggle_weather(&mut self, weather: Weather) {
        if !self.filters.weathers.remove(&weather) {
            self.filters.weathers.insert(weather);
        }
        self.refilter();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode != self.view_mode {
            self.view_mode = mode;
            self.refilter();
        }
    }

    /// Back to the full date range with no season or weather restriction.
    pub fn reset_filters(&mut self) {
        self.filters = init_filter_state(&self.datasets.daily);
        self.refilter();
    }
}

//! Turns the loaded collections plus a filter selection into the bundle of
//! tables and series the active view displays.

use serde::Deserialize;

use super::aggregate::{
    hourly_trend, monthly_ranking, monthly_trend, seasonal_comparison, seasonal_trend,
    temperature_effect, weather_effect, workday_effect, SeasonComparison, Series, WorkdayEffect,
};
use super::filter::FilterState;
use super::model::{
    DailyRecord, Datasets, HourlyRecord, NumericField, Season, TempBucket, Weather,
};
use super::stats::{correlation_matrix, describe, CorrelationMatrix, Summary};

/// Number of raw rows kept for the table previews.
pub const PREVIEW_ROWS: usize = 20;

/// Which bundle of results to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    DescriptiveStats,
    Visualization,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::DescriptiveStats, ViewMode::Visualization];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::DescriptiveStats => "Descriptive statistics",
            ViewMode::Visualization => "Rental charts",
        }
    }
}

/// Which aggregates the date/season/weather filter reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    /// Hourly aggregates and temperature buckets read the unfiltered collections.
    #[default]
    Parity,
    /// Every aggregate reads filtered input.
    Uniform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveBundle {
    pub filtered_rows: usize,
    pub daily_preview: Vec<DailyRecord>,
    pub hourly_preview: Vec<HourlyRecord>,
    pub summary: Vec<Summary>,
    pub hourly_summary: Vec<Summary>,
    pub correlation: CorrelationMatrix,
    pub numeric_summary: Vec<Summary>,
    pub monthly_ranking: Series<u32>,
    pub seasons: Vec<SeasonComparison>,
    pub workday: Vec<WorkdayEffect>,
    pub temperature: Series<TempBucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationBundle {
    pub filtered_rows: usize,
    pub monthly: Series<u32>,
    pub seasonal: Series<Season>,
    pub workday: Vec<WorkdayEffect>,
    pub hourly: Series<u8>,
    pub weather: Series<Weather>,
}

/// Results for one view mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBundle {
    Descriptive(DescriptiveBundle),
    Visualization(VisualizationBundle),
}

impl ViewBundle {
    pub fn filtered_rows(&self) -> usize {
        match self {
            ViewBundle::Descriptive(b) => b.filtered_rows,
            ViewBundle::Visualization(b) => b.filtered_rows,
        }
    }
}

/// Filter the collections and compute the bundle for `mode`.
pub fn compute_view(
    datasets: &Datasets,
    filters: &FilterState,
    mode: ViewMode,
    scope: FilterScope,
) -> ViewBundle {
    let daily_view: Vec<&DailyRecord> = filters.apply(&datasets.daily.records);
    let (hourly_view, bucket_input): (Vec<&HourlyRecord>, Vec<&DailyRecord>) = match scope {
        FilterScope::Parity => (
            datasets.hourly.records.iter().collect(),
            datasets.daily.records.iter().collect(),
        ),
        FilterScope::Uniform => (filters.apply(&datasets.hourly.records), daily_view.clone()),
    };

    match mode {
        ViewMode::DescriptiveStats => {
            let daily_seasons = seasonal_trend(daily_view.iter().copied());
            let hourly_seasons = seasonal_trend(hourly_view.iter().copied());
            ViewBundle::Descriptive(DescriptiveBundle {
                filtered_rows: daily_view.len(),
                daily_preview: daily_view
                    .iter()
                    .take(PREVIEW_ROWS)
                    .map(|r| (*r).clone())
                    .collect(),
                hourly_preview: hourly_view
                    .iter()
                    .take(PREVIEW_ROWS)
                    .map(|r| (*r).clone())
                    .collect(),
                summary: describe(&daily_view, &NumericField::ALL),
                hourly_summary: describe(&hourly_view, &NumericField::HOURLY),
                correlation: correlation_matrix(&daily_view, &NumericField::ALL),
                numeric_summary: describe(&daily_view, &NumericField::MEASUREMENTS),
                monthly_ranking: monthly_ranking(daily_view.iter().copied()),
                seasons: seasonal_comparison(&daily_seasons, &hourly_seasons),
                workday: workday_effect(daily_view.iter().copied()),
                temperature: temperature_effect(bucket_input),
            })
        }
        ViewMode::Visualization => ViewBundle::Visualization(VisualizationBundle {
            filtered_rows: daily_view.len(),
            monthly: monthly_trend(daily_view.iter().copied()),
            seasonal: seasonal_trend(daily_view.iter().copied()),
            workday: workday_effect(daily_view.iter().copied()),
            hourly: hourly_trend(hourly_view),
            weather: weather_effect(daily_view.iter().copied()),
        }),
    }
}

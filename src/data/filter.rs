use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{DailyDataset, RentalRecord, Season, Weather};

// ---------------------------------------------------------------------------
// Filter predicate: date range plus selected seasons and weathers
// ---------------------------------------------------------------------------

/// Active filter selection.
///
/// An empty season or weather set means "no restriction" for that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Inclusive lower date bound.
    pub start: NaiveDate,
    /// Inclusive upper date bound.
    pub end: NaiveDate,
    pub seasons: BTreeSet<Season>,
    pub weathers: BTreeSet<Weather>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
            seasons: BTreeSet::new(),
            weathers: BTreeSet::new(),
        }
    }
}

/// Initialise a [`FilterState`] spanning the dataset's full date range with
/// no season or weather restriction (i.e., show everything).
pub fn init_filter_state(dataset: &DailyDataset) -> FilterState {
    match dataset.date_bounds() {
        Some((start, end)) => FilterState {
            start,
            end,
            ..FilterState::default()
        },
        None => FilterState::default(),
    }
}

impl FilterState {
    /// Whether a single record passes every active constraint.
    ///
    /// An inverted range (`start > end`) matches nothing.
    pub fn matches<R: RentalRecord>(&self, record: &R) -> bool {
        let date = record.date();
        date >= self.start
            && date <= self.end
            && (self.seasons.is_empty() || self.seasons.contains(&record.season()))
            && (self.weathers.is_empty() || self.weathers.contains(&record.weather()))
    }

    /// Borrow the records passing the filter, keeping their order.
    pub fn apply<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: RentalRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        records.into_iter().filter(|r| self.matches(*r)).collect()
    }

    /// True when nothing would be removed from `dataset`.
    pub fn is_unrestricted_for(&self, dataset: &DailyDataset) -> bool {
        self.seasons.is_empty()
            && self.weathers.is_empty()
            && dataset
                .date_bounds()
                .map_or(true, |(min, max)| self.start <= min && self.end >= max)
    }
}

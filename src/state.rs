use std::ops::Range;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::data::aggregate::{
    DailyRentals, SeasonalAverage, WorkdaySummary, daily_rentals, seasonal_averages,
    total_rentals, workday_summary,
};
use crate::data::filter::filter_by_range;
use crate::data::model::{RentalDataset, RentalRecord};

// ---------------------------------------------------------------------------
// Derived dashboard view
// ---------------------------------------------------------------------------

/// Everything the central panel renders, derived from the filtered records.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub daily: Vec<DailyRentals>,
    pub total: u64,
    /// `None` when the range covers fewer than four seasons.
    pub seasonal: Option<Vec<SeasonalAverage>>,
    pub workday: WorkdaySummary,
}

impl DashboardView {
    pub fn from_records(records: &[RentalRecord]) -> Self {
        let daily = daily_rentals(records);
        let total = total_rentals(&daily);
        DashboardView {
            daily,
            total,
            seasonal: seasonal_averages(records),
            workday: workday_summary(records),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<RentalDataset>,

    /// Where the dataset came from, for File → Reload.
    pub source_path: Option<PathBuf>,

    /// Inclusive date range selected in the sidebar.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Index range of records passing the current date filter (cached).
    pub visible: Range<usize>,

    /// Aggregates over the visible records; `None` until a dataset is
    /// loaded and the selected range is valid.
    pub view: Option<DashboardView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_path: None,
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            visible: 0..0,
            view: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and select its full date range.
    pub fn set_dataset(&mut self, dataset: RentalDataset, source: PathBuf) {
        self.start_date = dataset.min_date;
        self.end_date = dataset.max_date;
        self.dataset = Some(dataset);
        self.source_path = Some(source);
        self.status_message = None;
        self.refilter();
    }

    /// Whether the selected pair forms a usable inclusive range.
    pub fn range_valid(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Recompute the visible records and their aggregates after a range
    /// change.  Dates outside the dataset bounds are clamped first, the
    /// way the original picker constrained its input.
    pub fn refilter(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.visible = 0..0;
            self.view = None;
            return;
        };

        self.start_date = self.start_date.clamp(dataset.min_date, dataset.max_date);
        self.end_date = self.end_date.clamp(dataset.min_date, dataset.max_date);

        if !self.range_valid() {
            self.visible = 0..0;
            self.view = None;
            return;
        }

        self.visible = filter_by_range(dataset, self.start_date, self.end_date);
        self.view = Some(DashboardView::from_records(
            &dataset.records[self.visible.clone()],
        ));
    }

    /// Reset the selection to the dataset's full date range.
    pub fn reset_range(&mut self) {
        if let Some(dataset) = &self.dataset {
            self.start_date = dataset.min_date;
            self.end_date = dataset.max_date;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Season;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(date: NaiveDate, hourly_count: u32) -> RentalRecord {
        RentalRecord {
            date,
            hourly_count,
            daily_count: hourly_count,
            season: Season::Winter,
            working_day: true,
        }
    }

    fn loaded_state() -> AppState {
        let dataset = RentalDataset::from_records(vec![
            rec(day(2011, 1, 1), 10),
            rec(day(2011, 1, 2), 20),
            rec(day(2011, 1, 3), 30),
        ])
        .unwrap();

        let mut state = AppState::default();
        state.set_dataset(dataset, PathBuf::from("all_data.csv"));
        state
    }

    #[test]
    fn loading_selects_the_full_range() {
        let state = loaded_state();
        assert_eq!(state.start_date, day(2011, 1, 1));
        assert_eq!(state.end_date, day(2011, 1, 3));
        assert_eq!(state.visible, 0..3);
        assert_eq!(state.view.as_ref().unwrap().total, 60);
    }

    #[test]
    fn narrowing_the_range_recomputes_the_view() {
        let mut state = loaded_state();
        state.end_date = day(2011, 1, 2);
        state.refilter();

        assert_eq!(state.visible, 0..2);
        assert_eq!(state.view.as_ref().unwrap().total, 30);
    }

    #[test]
    fn inverted_range_clears_the_view() {
        let mut state = loaded_state();
        state.start_date = day(2011, 1, 3);
        state.end_date = day(2011, 1, 1);
        state.refilter();

        assert!(!state.range_valid());
        assert!(state.view.is_none());
        assert!(state.visible.is_empty());
    }

    #[test]
    fn dates_clamp_to_dataset_bounds() {
        let mut state = loaded_state();
        state.start_date = day(2010, 6, 1);
        state.end_date = day(2012, 6, 1);
        state.refilter();

        assert_eq!(state.start_date, day(2011, 1, 1));
        assert_eq!(state.end_date, day(2011, 1, 3));
        assert_eq!(state.visible, 0..3);
    }

    #[test]
    fn reset_restores_the_full_range() {
        let mut state = loaded_state();
        state.start_date = day(2011, 1, 2);
        state.end_date = day(2011, 1, 2);
        state.refilter();
        assert_eq!(state.view.as_ref().unwrap().total, 20);

        state.reset_range();
        assert_eq!(state.start_date, day(2011, 1, 1));
        assert_eq!(state.view.as_ref().unwrap().total, 60);
    }
}

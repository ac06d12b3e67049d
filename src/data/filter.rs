use std::ops::Range;

use chrono::{Days, NaiveDate};

use super::model::RentalDataset;

// ---------------------------------------------------------------------------
// Date-range filter
// ---------------------------------------------------------------------------

/// Return the index range of records whose date lies in `[start, end]`
/// (inclusive on both ends).
///
/// The dataset is sorted chronologically, so the matching records form a
/// contiguous run and the original order is preserved.  An inverted pair
/// (`start > end`) yields an empty range.
pub fn filter_by_range(dataset: &RentalDataset, start: NaiveDate, end: NaiveDate) -> Range<usize> {
    let records = &dataset.records;
    let lo = records.partition_point(|r| r.date < start);
    let hi = records.partition_point(|r| r.date <= end);
    lo..hi.max(lo)
}

// ---------------------------------------------------------------------------
// Calendar-day iterator
// ---------------------------------------------------------------------------

/// Yields every calendar day from `start` through `end`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    cursor: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { cursor: start, end }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > self.end {
            return None;
        }
        let day = self.cursor;
        self.cursor = day + Days::new(1);
        Some(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{RentalRecord, Season};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(date: NaiveDate, hourly_count: u32) -> RentalRecord {
        RentalRecord {
            date,
            hourly_count,
            daily_count: 100,
            season: Season::Winter,
            working_day: false,
        }
    }

    fn sample_dataset() -> RentalDataset {
        RentalDataset::from_records(vec![
            rec(day(2011, 1, 1), 10),
            rec(day(2011, 1, 1), 20),
            rec(day(2011, 1, 2), 30),
            rec(day(2011, 1, 4), 40),
            rec(day(2011, 1, 5), 50),
        ])
        .unwrap()
    }

    #[test]
    fn filtered_records_lie_within_range_in_order() {
        let dataset = sample_dataset();
        let range = filter_by_range(&dataset, day(2011, 1, 2), day(2011, 1, 4));
        let records = &dataset.records[range];

        assert_eq!(records.len(), 2);
        for r in records {
            assert!(r.date >= day(2011, 1, 2) && r.date <= day(2011, 1, 4));
        }
        assert!(records.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn single_day_range_returns_only_that_day() {
        let dataset = sample_dataset();
        let range = filter_by_range(&dataset, day(2011, 1, 1), day(2011, 1, 1));
        let records = &dataset.records[range];

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date == day(2011, 1, 1)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let dataset = sample_dataset();
        assert!(filter_by_range(&dataset, day(2011, 1, 4), day(2011, 1, 2)).is_empty());
    }

    #[test]
    fn range_outside_data_is_empty() {
        let dataset = sample_dataset();
        assert!(filter_by_range(&dataset, day(2012, 1, 1), day(2012, 12, 31)).is_empty());
    }

    #[test]
    fn full_range_keeps_every_record() {
        let dataset = sample_dataset();
        let range = filter_by_range(&dataset, dataset.min_date, dataset.max_date);
        assert_eq!(range, 0..dataset.len());
    }

    #[test]
    fn date_range_walks_inclusive_days() {
        let days: Vec<NaiveDate> = DateRange::new(day(2011, 2, 27), day(2011, 3, 2)).collect();
        assert_eq!(
            days,
            vec![
                day(2011, 2, 27),
                day(2011, 2, 28),
                day(2011, 3, 1),
                day(2011, 3, 2),
            ]
        );
    }

    #[test]
    fn date_range_single_day() {
        let days: Vec<NaiveDate> = DateRange::new(day(2011, 7, 4), day(2011, 7, 4)).collect();
        assert_eq!(days, vec![day(2011, 7, 4)]);
    }

    #[test]
    fn date_range_inverted_is_empty() {
        assert_eq!(DateRange::new(day(2011, 7, 4), day(2011, 7, 3)).count(), 0);
    }
}

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Season – the four fixed categories of the source data
// ---------------------------------------------------------------------------

/// Season category, encoded 1–4 in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in source-code order (1, 2, 3, 4).
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// The numeric code used by the source file.
    pub fn code(self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = SchemaError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            other => Err(SchemaError::UnknownSeason(other)),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Record-level schema violations detected while loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown season code {0} (expected 1-4)")]
    UnknownSeason(u8),
    #[error("working-day flag must be 0 or 1, got {0}")]
    InvalidWorkingDay(u8),
}

// ---------------------------------------------------------------------------
// RentalRecord – one row of the source file
// ---------------------------------------------------------------------------

/// One hourly observation. The daily fields repeat on every hourly row of
/// the same calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    pub date: NaiveDate,
    /// Rentals within this one-hour bucket.
    pub hourly_count: u32,
    /// Rentals for the whole calendar day.
    pub daily_count: u32,
    pub season: Season,
    pub working_day: bool,
}

// ---------------------------------------------------------------------------
// RentalDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full record set, sorted chronologically, with its date bounds.
#[derive(Debug, Clone)]
pub struct RentalDataset {
    pub records: Vec<RentalRecord>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl RentalDataset {
    /// Sort the records chronologically and capture the date bounds.
    /// Returns `None` for an empty record set, which has no bounds.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Option<Self> {
        records.sort_by_key(|r| r.date);
        let min_date = records.first()?.date;
        let max_date = records.last()?.date;
        Some(RentalDataset {
            records,
            min_date,
            max_date,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(date: NaiveDate) -> RentalRecord {
        RentalRecord {
            date,
            hourly_count: 1,
            daily_count: 24,
            season: Season::Spring,
            working_day: true,
        }
    }

    #[test]
    fn season_codes_round_trip() {
        for season in Season::ALL {
            assert_eq!(Season::try_from(season.code()), Ok(season));
        }
    }

    #[test]
    fn unknown_season_codes_are_rejected() {
        assert_eq!(Season::try_from(0), Err(SchemaError::UnknownSeason(0)));
        assert_eq!(Season::try_from(5), Err(SchemaError::UnknownSeason(5)));
    }

    #[test]
    fn records_are_sorted_on_construction() {
        let records = vec![
            rec(day(2011, 3, 2)),
            rec(day(2011, 1, 1)),
            rec(day(2011, 2, 14)),
        ];
        let dataset = RentalDataset::from_records(records).unwrap();

        let dates: Vec<NaiveDate> = dataset.records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![day(2011, 1, 1), day(2011, 2, 14), day(2011, 3, 2)]
        );
        assert_eq!(dataset.min_date, day(2011, 1, 1));
        assert_eq!(dataset.max_date, day(2011, 3, 2));
    }

    #[test]
    fn empty_record_set_has_no_dataset() {
        assert!(RentalDataset::from_records(Vec::new()).is_none());
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::filter::DateRange;
use super::model::{RentalRecord, Season};

// ---------------------------------------------------------------------------
// Daily series
// ---------------------------------------------------------------------------

/// Rentals summed over one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRentals {
    pub date: NaiveDate,
    pub rentals: u64,
}

/// Sum the hourly counts per calendar day.
///
/// The series spans every day from the first to the last record date,
/// so days without records report 0 (calendar resampling).  Input must be
/// chronologically sorted, which the dataset guarantees.
pub fn daily_rentals(records: &[RentalRecord]) -> Vec<DailyRentals> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Vec::new();
    };

    let mut sums: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.date).or_insert(0) += u64::from(r.hourly_count);
    }

    DateRange::new(first.date, last.date)
        .map(|date| DailyRentals {
            date,
            rentals: sums.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Total rentals over the filtered range: the sum of the daily series.
pub fn total_rentals(daily: &[DailyRentals]) -> u64 {
    daily.iter().map(|d| d.rentals).sum()
}

// ---------------------------------------------------------------------------
// Seasonal averages
// ---------------------------------------------------------------------------

/// Mean daily rental count for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalAverage {
    pub season: Season,
    pub average: f64,
}

/// Mean of the daily-count field per season, in season order.
///
/// Only meaningful when the filtered range covers the whole year, so this
/// returns `None` unless all four seasons are present.
pub fn seasonal_averages(records: &[RentalRecord]) -> Option<Vec<SeasonalAverage>> {
    let mut sums: BTreeMap<Season, (f64, u64)> = BTreeMap::new();
    for r in records {
        let entry = sums.entry(r.season).or_insert((0.0, 0));
        entry.0 += f64::from(r.daily_count);
        entry.1 += 1;
    }

    if sums.len() < Season::ALL.len() {
        return None;
    }

    Some(
        sums.into_iter()
            .map(|(season, (sum, count))| SeasonalAverage {
                season,
                average: sum / count as f64,
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Working-day distribution
// ---------------------------------------------------------------------------

/// Box-plot statistics: quartiles by linear interpolation, whiskers at
/// 1.5×IQR clipped to the observed data, values beyond them as outliers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<BoxStats> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let q3 = percentile(&sorted, 0.75);

        let reach = 1.5 * (q3 - q1);
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|v| *v >= q1 - reach)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= q3 + reach)
            .unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < whisker_low || *v > whisker_high)
            .collect();

        Some(BoxStats {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
            outliers,
        })
    }
}

/// Linear-interpolation percentile over a sorted slice, `p` in `[0, 1]`.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Daily-count distribution for one working-day category.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkdayGroup {
    pub working_day: bool,
    pub stats: BoxStats,
}

/// The filtered records' daily counts split by the working-day flag,
/// non-working first.  A category with no records produces no group.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkdaySummary {
    pub groups: Vec<WorkdayGroup>,
}

pub fn workday_summary(records: &[RentalRecord]) -> WorkdaySummary {
    let mut split: BTreeMap<bool, Vec<f64>> = BTreeMap::new();
    for r in records {
        split
            .entry(r.working_day)
            .or_default()
            .push(f64::from(r.daily_count));
    }

    let groups = split
        .into_iter()
        .filter_map(|(working_day, values)| {
            BoxStats::from_values(&values).map(|stats| WorkdayGroup { working_day, stats })
        })
        .collect();

    WorkdaySummary { groups }
}

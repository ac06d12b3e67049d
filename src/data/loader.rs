use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;

use super::model::{RentalDataset, RentalRecord, SchemaError, Season};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a rental dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the schema columns below (recommended)
/// * `.json` – records-oriented array with the same fields
pub fn load_file(path: &Path) -> Result<RentalDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row schema
// ---------------------------------------------------------------------------

/// The schema columns of the source file.  Any further columns are
/// passthrough data and are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    dteday: NaiveDate,
    cnt_hourly: u32,
    cnt_daily: u32,
    season_daily: u8,
    workingday_daily: u8,
}

impl TryFrom<RawRecord> for RentalRecord {
    type Error = SchemaError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let working_day = match raw.workingday_daily {
            0 => false,
            1 => true,
            other => return Err(SchemaError::InvalidWorkingDay(other)),
        };
        Ok(RentalRecord {
            date: raw.dteday,
            hourly_count: raw.cnt_hourly,
            daily_count: raw.cnt_daily,
            season: Season::try_from(raw.season_daily)?,
            working_day,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the five schema columns, one
/// record per hourly observation.  Rows may arrive in any order; the
/// dataset is sorted chronologically after parsing.
fn load_csv(path: &Path) -> Result<RentalDataset> {
    let file = std::fs::File::open(path).context("opening CSV file")?;
    parse_csv(file)
}

fn parse_csv(input: impl io::Read) -> Result<RentalDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record =
            RentalRecord::try_from(raw).with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    RentalDataset::from_records(records).context("dataset contains no data rows")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "dteday": "2011-01-01",
///     "cnt_hourly": 16,
///     "cnt_daily": 985,
///     "season_daily": 1,
///     "workingday_daily": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<RentalDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<RentalDataset> {
    let raws: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let records = raws
        .into_iter()
        .enumerate()
        .map(|(i, raw)| RentalRecord::try_from(raw).with_context(|| format!("JSON record {i}")))
        .collect::<Result<Vec<_>>>()?;

    RentalDataset::from_records(records).context("dataset contains no data rows")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "dteday,hr,cnt_hourly,cnt_daily,season_daily,workingday_daily";

    fn dataset_from(rows: &[&str]) -> Result<RentalDataset> {
        let text = std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n");
        parse_csv(text.as_bytes())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_sorts_csv_rows() {
        // Rows intentionally out of order; `hr` is a passthrough column.
        let dataset = dataset_from(&[
            "2011-01-02,0,40,95,1,0",
            "2011-01-01,1,25,55,1,1",
            "2011-01-01,0,30,55,1,1",
        ])
        .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.min_date, day(2011, 1, 1));
        assert_eq!(dataset.max_date, day(2011, 1, 2));
        assert_eq!(dataset.records[0].date, day(2011, 1, 1));
        assert_eq!(dataset.records[2].date, day(2011, 1, 2));
        assert_eq!(dataset.records[2].hourly_count, 40);
        assert_eq!(dataset.records[2].daily_count, 95);
        assert_eq!(dataset.records[2].season, Season::Spring);
        assert!(!dataset.records[2].working_day);
    }

    #[test]
    fn rejects_unknown_season_code() {
        let err = dataset_from(&["2011-01-01,0,30,55,9,1"]).unwrap_err();
        assert!(err.to_string().contains("CSV row 0"));
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::UnknownSeason(9))
        );
    }

    #[test]
    fn rejects_invalid_working_day_flag() {
        let err = dataset_from(&["2011-01-01,0,30,55,1,2"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::InvalidWorkingDay(2))
        );
    }

    #[test]
    fn rejects_empty_file() {
        assert!(dataset_from(&[]).is_err());
    }

    #[test]
    fn parses_json_records() {
        let dataset = parse_json(
            r#"[
                {"dteday": "2012-06-30", "cnt_hourly": 120, "cnt_daily": 2400, "season_daily": 2, "workingday_daily": 0},
                {"dteday": "2012-06-29", "cnt_hourly": 80, "cnt_daily": 1900, "season_daily": 2, "workingday_daily": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].date, day(2012, 6, 29));
        assert_eq!(dataset.records[1].season, Season::Summer);
    }

    #[test]
    fn rejects_unsupported_extension() {
        assert!(load_file(Path::new("all_data.parquet")).is_err());
    }
}

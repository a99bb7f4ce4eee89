use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::filter::{self, Filters};
use super::model::{TripRecord, TripTable};

/// Columns every city file must carry.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Accepted `Start Time` layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a city file and keep only the trips passing `filters`.
pub fn load_data(path: &Path, filters: &Filters) -> Result<TripTable> {
    let table = load_csv(path)?;
    let total = table.len();
    let filtered = filter::apply(table, filters);
    log::info!(
        "{}: kept {} of {total} trips (month={}, day={})",
        filters.city,
        filtered.len(),
        filters.month,
        filters.day
    );
    if filtered.is_empty() {
        log::warn!("{}: no trips match the selected month and day", filters.city);
    }
    Ok(filtered)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Typed view of the columns the reports need. Other columns are only kept
/// as raw text for the pager.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Stored as `1992.0` in the source files, blank when unknown.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Read a whole city file, deriving month / weekday / hour per trip.
///
/// Any unreadable file, missing required column or malformed row aborts the
/// load.
pub fn load_csv(path: &Path) -> Result<TripTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("reading CSV headers of {}", path.display()))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("{}: CSV missing '{column}' column", path.display());
        }
    }
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let raw: RawTrip = record
            .deserialize(Some(&headers))
            .with_context(|| format!("CSV row {row_no}: unexpected field value"))?;
        let start_time = parse_timestamp(&raw.start_time)
            .with_context(|| format!("CSV row {row_no}: bad 'Start Time'"))?;

        let mut trip = TripRecord {
            source_index: row_no,
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            trip_duration: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.map(|year| year as i64),
            month: "",
            day_of_week: "",
            hour: 0,
            cells: record.iter().map(|cell| cell.to_string()).collect(),
        };
        trip.derive_time_fields();
        records.push(trip);
    }

    log::debug!(
        "loaded {} trips from {} (gender: {has_gender}, birth year: {has_birth_year})",
        records.len(),
        path.display()
    );

    Ok(TripTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        records,
        has_gender,
        has_birth_year,
    })
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .with_context(|| format!("'{text}' is not a timestamp"))
}

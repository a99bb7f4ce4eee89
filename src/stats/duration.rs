use std::fmt;

use crate::data::model::TripTable;

use super::reduce::sum_and_mean;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let (total, mean) = sum_and_mean(table.records.iter().map(|trip| trip.trip_duration));
    DurationStats { total, mean }
}

/// `HH:MM:SS` from whole seconds; fractions are dropped. Hours grow past two
/// digits when needed.
pub fn format_hms(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    let (hours, remainder) = (whole / 3600, whole % 3600);
    let (minutes, seconds) = (remainder / 60, remainder % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `<label>: HH:MM:SS`
pub fn labelled_duration(label: &str, seconds: f64) -> String {
    format!("{label}: {}", format_hms(seconds))
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", labelled_duration("Total Travel Time", self.total))?;
        match self.mean {
            Some(mean) => writeln!(f, "{}", labelled_duration("Mean Travel Time", mean)),
            None => writeln!(f, "Mean Travel Time: n/a"),
        }
    }
}

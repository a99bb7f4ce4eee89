use std::fmt;

use crate::data::model::TripTable;

use super::{capitalize, or_na, reduce::mode};

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<&'static str>,
    pub day_of_week: Option<&'static str>,
    pub hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = &table.records;
    TimeStats {
        month: mode(trips.iter().map(|trip| trip.month)),
        day_of_week: mode(trips.iter().map(|trip| trip.day_of_week)),
        hour: mode(trips.iter().map(|trip| trip.hour)),
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most Common Month: {}", or_na(self.month.map(capitalize)))?;
        writeln!(f, "Most Common Day of Week: {}", or_na(self.day_of_week.map(capitalize)))?;
        writeln!(f, "Most Common Start Hour: {}", or_na(self.hour))
    }
}

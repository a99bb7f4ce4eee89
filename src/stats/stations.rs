use std::fmt;

use crate::data::model::TripTable;

use super::{or_na, reduce::mode};

/// Most popular start station, end station and start → end trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<String>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let trips = &table.records;
    StationStats {
        start_station: mode(trips.iter().map(|trip| trip.start_station.as_str())).map(String::from),
        end_station: mode(trips.iter().map(|trip| trip.end_station.as_str())).map(String::from),
        trip: mode(trips.iter().map(|trip| trip.trip_label())),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most Common Start Station: {}", or_na(self.start_station.as_deref()))?;
        writeln!(f, "Most Common End Station: {}", or_na(self.end_station.as_deref()))?;
        writeln!(f, "Most Common Trip: {}", or_na(self.trip.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{table, trip};

    #[test]
    fn picks_most_common_stations_and_trip() {
        let table = table(vec![
            trip("2017-01-02 08:00:00", "Clark St", "Lake St", 100.0),
            trip("2017-01-02 09:00:00", "State St", "Lake St", 100.0),
            trip("2017-01-02 10:00:00", "State St", "Clark St", 100.0),
            trip("2017-01-02 11:00:00", "Clark St", "Lake St", 100.0),
        ]);
        let stats = station_stats(&table);
        // Clark St and State St tie as start stations; Clark St sorts first.
        assert_eq!(stats.start_station.as_deref(), Some("Clark St"));
        assert_eq!(stats.end_station.as_deref(), Some("Lake St"));
        assert_eq!(stats.trip.as_deref(), Some("From \"Clark St\" To \"Lake St\""));
    }

    #[test]
    fn empty_selection_prints_placeholders() {
        let stats = station_stats(&table(Vec::new()));
        assert_eq!(
            stats.to_string(),
            "Most Common Start Station: n/a\nMost Common End Station: n/a\nMost Common Trip: n/a\n"
        );
    }
}

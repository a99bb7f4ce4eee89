use chrono::{Datelike, NaiveDateTime, Timelike};

// ---------------------------------------------------------------------------
// Calendar tokens used for derived fields and filters
// ---------------------------------------------------------------------------

/// Lowercase 3-letter month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Lowercase 3-letter weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

// ---------------------------------------------------------------------------
// TripRecord – one row of a city file
// ---------------------------------------------------------------------------

/// A single trip (one row of the source CSV) with its derived time fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based row position in the source file.
    pub source_index: usize,
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Seconds; some cities record fractions.
    pub trip_duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i64>,
    /// Derived from `start_time`.
    pub month: &'static str,
    pub day_of_week: &'static str,
    pub hour: u32,
    /// Raw cell text in source column order.
    pub cells: Vec<String>,
}

impl TripRecord {
    /// Fill in `month`, `day_of_week` and `hour` from `start_time`.
    pub fn derive_time_fields(&mut self) {
        self.month = MONTH_NAMES[self.start_time.month0() as usize];
        self.day_of_week = WEEKDAY_NAMES[self.start_time.weekday().num_days_from_monday() as usize];
        self.hour = self.start_time.hour();
    }

    /// `From "<start>" To "<end>"`
    pub fn trip_label(&self) -> String {
        format!("From \"{}\" To \"{}\"", self.start_station, self.end_station)
    }
}

// ---------------------------------------------------------------------------
// TripTable – the loaded (and possibly filtered) city dataset
// ---------------------------------------------------------------------------

/// All trips of one city plus the shape of its source file.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    /// Source column names, in file order.
    pub headers: Vec<String>,
    pub records: Vec<TripRecord>,
    /// Whether the source file carries a `Gender` column.
    pub has_gender: bool,
    /// Whether the source file carries a `Birth Year` column.
    pub has_birth_year: bool,
}

impl TripTable {
    /// Number of trips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no trips.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows `[start, end)`, clamped to the table bounds.
    pub fn window(&self, start: usize, end: usize) -> &[TripRecord] {
        let end = end.min(self.records.len());
        let start = start.min(end);
        &self.records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record_at(ts: NaiveDateTime) -> TripRecord {
        let mut record = TripRecord {
            source_index: 0,
            start_time: ts,
            start_station: "Canal St & Adams St".to_string(),
            end_station: "Clinton St & Madison St".to_string(),
            trip_duration: 600.0,
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            month: "",
            day_of_week: "",
            hour: 0,
            cells: Vec::new(),
        };
        record.derive_time_fields();
        record
    }

    #[test]
    fn derives_month_weekday_and_hour() {
        // 2017-06-23 was a Friday.
        let ts = NaiveDate::from_ymd_opt(2017, 6, 23)
            .unwrap()
            .and_hms_opt(15, 9, 32)
            .unwrap();
        let record = record_at(ts);
        assert_eq!(record.month, "jun");
        assert_eq!(record.day_of_week, "fri");
        assert_eq!(record.hour, 15);
    }

    #[test]
    fn sunday_maps_to_last_weekday_name() {
        let ts = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 7, 57)
            .unwrap();
        let record = record_at(ts);
        assert_eq!(record.month, "jan");
        assert_eq!(record.day_of_week, "sun");
        assert_eq!(record.hour, 0);
    }

    #[test]
    fn trip_label_quotes_both_stations() {
        let ts = NaiveDate::from_ymd_opt(2017, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(
            record_at(ts).trip_label(),
            "From \"Canal St & Adams St\" To \"Clinton St & Madison St\""
        );
    }

    #[test]
    fn window_is_clamped_to_table() {
        let ts = NaiveDate::from_ymd_opt(2017, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let table = TripTable {
            records: vec![record_at(ts); 3],
            ..Default::default()
        };
        assert_eq!(table.window(1, 10).len(), 2);
        assert!(table.window(5, 10).is_empty());
    }
}

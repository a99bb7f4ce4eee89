use std::fmt;

use super::model::{TripRecord, TripTable};

// ---------------------------------------------------------------------------
// Accepted answer tokens
// ---------------------------------------------------------------------------

/// Month answers: the six months covered by the datasets, or `all`.
pub const MONTH_TOKENS: [&str; 7] = ["jan", "feb", "mar", "apr", "may", "jun", "all"];

/// Day-of-week answers, or `all`.
pub const DAY_TOKENS: [&str; 8] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun", "all"];

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// One of the three cities with a backing trip file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase answer token, also used as the key in override files.
    pub fn token(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn from_token(token: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.token() == token)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Choice / Filters
// ---------------------------------------------------------------------------

/// Equality constraint on a derived field. `All` means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    All,
    Only(&'static str),
}

impl Choice {
    pub fn from_token(token: &'static str) -> Choice {
        if token == "all" {
            Choice::All
        } else {
            Choice::Only(token)
        }
    }

    /// Whether a derived value passes this constraint.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => *wanted == value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("all"),
            Choice::Only(token) => f.write_str(token),
        }
    }
}

/// The user's selection for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: Choice,
    pub day: Choice,
}

impl Filters {
    /// A trip passes when both its month and weekday are admitted.
    pub fn matches(&self, trip: &TripRecord) -> bool {
        self.month.admits(trip.month) && self.day.admits(trip.day_of_week)
    }
}

/// Keep only trips passing `filters`, preserving source order.
pub fn apply(mut table: TripTable, filters: &Filters) -> TripTable {
    table.records.retain(|trip| filters.matches(trip));
    table
}

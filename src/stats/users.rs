use std::fmt;

use crate::data::model::TripTable;

use super::{or_na, reduce::{min_max, mode, value_counts}};

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: Option<i64>,
    pub most_recent: Option<i64>,
    pub most_common: Option<i64>,
}

/// Rider breakdown. `genders` and `birth_years` are `None` when the city
/// file has no such column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.records;

    let user_types = owned_counts(value_counts(
        trips.iter().filter_map(|trip| trip.user_type.as_deref()),
    ));

    let genders = table.has_gender.then(|| {
        owned_counts(value_counts(
            trips.iter().filter_map(|trip| trip.gender.as_deref()),
        ))
    });

    let birth_years = table.has_birth_year.then(|| {
        let years = || trips.iter().filter_map(|trip| trip.birth_year);
        let range = min_max(years());
        BirthYears {
            earliest: range.map(|(lo, _)| lo),
            most_recent: range.map(|(_, hi)| hi),
            most_common: mode(years()),
        }
    });

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect()
}

/// Column title, then one `value  count` line per category.
fn write_counts(f: &mut fmt::Formatter<'_>, title: &str, counts: &[(String, usize)]) -> fmt::Result {
    writeln!(f, "{title}")?;
    let width = counts.iter().map(|(value, _)| value.chars().count()).max().unwrap_or(0);
    for (value, n) in counts {
        writeln!(f, "{value:<width$}    {n}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User Type", &self.user_types)?;

        if let Some(genders) = &self.genders {
            writeln!(f)?;
            write_counts(f, "Gender", genders)?;
        }

        if let Some(years) = &self.birth_years {
            writeln!(f)?;
            writeln!(f, "Earliest Year of Birth: {}", or_na(years.earliest))?;
            writeln!(f, "Most Recent Year of Birth: {}", or_na(years.most_recent))?;
            writeln!(f, "Most Common Year of Birth: {}", or_na(years.most_common))?;
        }
        Ok(())
    }
}

/// Descriptive statistics over a filtered trip table.
///
/// Each report is computed by a stateless function returning a value that
/// prints itself; [`print_timed`] wraps one computation with a heading, its
/// elapsed time and a separator.

pub mod duration;
pub mod reduce;
pub mod stations;
pub mod time;
pub mod users;

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::time::Instant;

/// Line printed between report sections.
pub const SEPARATOR: &str = "----------------------------------------";

/// Print `heading`, run `compute`, print its result and how long it took.
pub fn print_timed<W, T, F>(out: &mut W, heading: &str, compute: F) -> io::Result<T>
where
    W: Write,
    T: Display,
    F: FnOnce() -> T,
{
    writeln!(out, "\n{heading}\n")?;
    let started = Instant::now();
    let report = compute();
    let elapsed = started.elapsed();
    write!(out, "{report}")?;
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(report)
}

/// `jun` → `Jun`
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Placeholder for statistics of an empty selection.
fn or_na<T: Display>(value: Option<T>) -> NotAvailable<T> {
    NotAvailable(value)
}

struct NotAvailable<T>(Option<T>);

impl<T: Display> Display for NotAvailable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("n/a"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{table, trip};
    use super::time::time_stats;
    use super::*;

    #[test]
    fn capitalizes_tokens() {
        assert_eq!(capitalize("jun"), "Jun");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn time_stats_reports_modes() {
        // 2017-03-06 is a Monday, 2017-03-07 a Tuesday.
        let table = table(vec![
            trip("2017-03-06 17:00:00", "A", "B", 60.0),
            trip("2017-03-07 17:30:00", "A", "B", 60.0),
            trip("2017-02-07 08:00:00", "A", "B", 60.0),
            trip("2017-01-06 08:15:00", "A", "B", 60.0),
        ]);
        let stats = time_stats(&table);
        assert_eq!(stats.month, Some("mar"));
        assert_eq!(stats.day_of_week, Some("tue"));
        // 8 and 17 tie; the lower hour wins.
        assert_eq!(stats.hour, Some(8));
        assert_eq!(
            stats.to_string(),
            "Most Common Month: Mar\nMost Common Day of Week: Tue\nMost Common Start Hour: 8\n"
        );
    }

    #[test]
    fn print_timed_wraps_the_report() {
        let mut out = Vec::new();
        let stats = print_timed(&mut out, "Calculating Trip Duration...", || {
            duration::duration_stats(&table(vec![trip("2017-05-01 10:00:00", "A", "B", 3661.0)]))
        })
        .unwrap();
        assert_eq!(stats.total, 3661.0);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("\nCalculating Trip Duration...\n\n"));
        assert!(printed.contains("Total Travel Time: 01:01:01\n"));
        assert!(printed.contains("\nThis took "));
        assert!(printed.ends_with(&format!("{SEPARATOR}\n")));
    }
}

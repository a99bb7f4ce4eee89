use std::io::{self, BufRead, Write};

use crate::console::{Console, PromptError};
use crate::data::model::{TripRecord, TripTable};

const SHOW_MORE_PROMPT: &str = "\nWould you like to see raw data? Enter yes or no.\n";
const ROW_COUNT_PROMPT: &str = "\nHow many rows do you wanna see?\n";

/// Columns appended after the source columns.
const DERIVED_COLUMNS: [&str; 3] = ["month", "day_of_week", "hour"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerState {
    AwaitShowMore,
    AwaitRowCount,
    Displaying(usize),
    Exhausted,
    Done,
}

/// How a paging run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerOutcome {
    /// The user answered "no".
    Declined,
    /// A request ran past the last row.
    Exhausted,
}

// ---------------------------------------------------------------------------
// Pager – successive raw-row windows on request
// ---------------------------------------------------------------------------

pub struct Pager<'t> {
    table: &'t TripTable,
    row_start: usize,
}

impl<'t> Pager<'t> {
    pub fn new(table: &'t TripTable) -> Self {
        Self {
            table,
            row_start: 0,
        }
    }

    /// Ask for windows until the user declines or the rows run out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<PagerOutcome, PromptError> {
        let mut state = PagerState::AwaitShowMore;
        loop {
            state = match state {
                PagerState::AwaitShowMore => {
                    let answer = console.ask(SHOW_MORE_PROMPT)?.to_lowercase();
                    match answer.as_str() {
                        "yes" => PagerState::AwaitRowCount,
                        "no" => PagerState::Done,
                        _ => {
                            console.say("Please enter a valid response (yes or no).")?;
                            PagerState::AwaitShowMore
                        }
                    }
                }
                PagerState::AwaitRowCount => match parse_row_count(&console.ask(ROW_COUNT_PROMPT)?) {
                    RowCount::NotInteger => {
                        console.say("Please enter a valid integer.")?;
                        PagerState::AwaitRowCount
                    }
                    RowCount::NotPositive => {
                        console.say("Please enter a positive number.")?;
                        PagerState::AwaitRowCount
                    }
                    RowCount::Rows(n) => PagerState::Displaying(n),
                },
                PagerState::Displaying(count) => self.display(console, count)?,
                PagerState::Exhausted => return Ok(PagerOutcome::Exhausted),
                PagerState::Done => return Ok(PagerOutcome::Declined),
            };
        }
    }

    fn display<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        count: usize,
    ) -> Result<PagerState, PromptError> {
        let total = self.table.len();
        let row_start = self.row_start;
        let row_end = row_start.saturating_add(count);

        if row_end > total {
            console.say(format!(
                "The last available row is {total}. Displaying rows {row_start} to {total}:\n"
            ))?;
            write_window(console.output(), self.table, row_start, total)?;
            console.say("\nNo more data to display.")?;
            log::debug!("pager exhausted after {total} rows");
            return Ok(PagerState::Exhausted);
        }

        console.say(format!("Displaying rows {row_start} to {row_end}:\n"))?;
        write_window(console.output(), self.table, row_start, row_end)?;
        self.row_start = row_end;
        Ok(PagerState::AwaitShowMore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowCount {
    Rows(usize),
    NotPositive,
    NotInteger,
}

/// Signed decimal integer of any size; counts past `usize::MAX` saturate.
fn parse_row_count(text: &str) -> RowCount {
    if let Ok(n) = text.parse::<i64>() {
        return match usize::try_from(n) {
            Ok(0) | Err(_) => RowCount::NotPositive,
            Ok(n) => RowCount::Rows(n),
        };
    }

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        RowCount::NotInteger
    } else if negative {
        RowCount::NotPositive
    } else {
        RowCount::Rows(usize::MAX)
    }
}

/// Display width of a cell in characters.
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Print rows `[start, end)` as a left-aligned table: source index, source
/// columns, then the derived columns.
pub fn write_window<W: Write>(out: &mut W, table: &TripTable, start: usize, end: usize) -> io::Result<()> {
    let rows = table.window(start, end);

    let mut header: Vec<String> = vec![String::new()];
    header.extend(table.headers.iter().cloned());
    header.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));

    let lines: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| cell_width(h)).collect();
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(cell_width(cell)),
                None => widths.push(cell_width(cell)),
            }
        }
    }

    write_line(out, &header, &widths)?;
    for line in &lines {
        write_line(out, line, &widths)?;
    }
    Ok(())
}

fn row_cells(trip: &TripRecord) -> Vec<String> {
    let mut cells = Vec::with_capacity(trip.cells.len() + 4);
    cells.push(trip.source_index.to_string());
    cells.extend(trip.cells.iter().cloned());
    cells.push(trip.month.to_string());
    cells.push(trip.day_of_week.to_string());
    cells.push(trip.hour.to_string());
    cells
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::{table, trip};
    use std::io::Cursor;

    fn rows(n: usize) -> TripTable {
        let mut table = table(
            (0..n)
                .map(|i| {
                    let mut record = trip("2017-02-14 09:00:00", "A", "B", 60.0);
                    record.cells = vec![format!("id-{i}"), "2017-02-14 09:00:00".to_string()];
                    record
                })
                .collect(),
        );
        table.headers = vec!["Id".to_string(), "Start Time".to_string()];
        table
    }

    fn page(table: &TripTable, input: &str) -> (PagerOutcome, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let outcome = Pager::new(table).run(&mut console).unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    fn shown_ids(printed: &str) -> Vec<String> {
        printed
            .split_whitespace()
            .filter(|word| word.starts_with("id-"))
            .map(String::from)
            .collect()
    }

    #[test]
    fn pages_then_clamps_and_stops() {
        let table = rows(25);
        let (outcome, printed) = page(&table, "yes\n10\nyes\n10\nyes\n10\n");

        assert_eq!(outcome, PagerOutcome::Exhausted);
        assert!(printed.contains("Displaying rows 0 to 10:"));
        assert!(printed.contains("Displaying rows 10 to 20:"));
        assert!(printed.contains("The last available row is 25. Displaying rows 20 to 25:"));
        assert!(printed.trim_end().ends_with("No more data to display."));
        let expected: Vec<String> = (0..25).map(|i| format!("id-{i}")).collect();
        assert_eq!(shown_ids(&printed), expected);
        // Three show-more prompts, none after exhaustion.
        assert_eq!(printed.matches("Would you like to see raw data?").count(), 3);
    }

    #[test]
    fn no_shows_nothing() {
        let table = rows(25);
        let (outcome, printed) = page(&table, "NO\n");
        assert_eq!(outcome, PagerOutcome::Declined);
        assert!(shown_ids(&printed).is_empty());
        assert!(!printed.contains("Displaying"));
    }

    #[test]
    fn bad_answers_reprompt_without_moving() {
        let table = rows(5);
        let (outcome, printed) = page(&table, "maybe\nyes\nten\n0\n-3\n2\nno\n");
        assert_eq!(outcome, PagerOutcome::Declined);
        assert!(printed.contains("Please enter a valid response (yes or no)."));
        assert_eq!(printed.matches("Please enter a valid integer.").count(), 1);
        assert_eq!(printed.matches("Please enter a positive number.").count(), 2);
        assert_eq!(shown_ids(&printed), vec!["id-0", "id-1"]);
    }

    #[test]
    fn exact_fit_needs_one_more_request_to_exhaust() {
        let table = rows(4);
        let (outcome, printed) = page(&table, "yes\n4\nyes\n1\n");
        assert_eq!(outcome, PagerOutcome::Exhausted);
        assert!(printed.contains("Displaying rows 0 to 4:"));
        assert!(printed.contains("The last available row is 4. Displaying rows 4 to 4:"));
        assert_eq!(shown_ids(&printed).len(), 4);
    }

    #[test]
    fn oversized_count_shows_every_row() {
        let table = rows(3);
        let (outcome, printed) = page(&table, "yes\n99999999999999999999\n");
        assert_eq!(outcome, PagerOutcome::Exhausted);
        assert!(!printed.contains("Please enter a valid integer."));
        assert!(printed.contains("The last available row is 3. Displaying rows 0 to 3:"));
        assert!(printed.trim_end().ends_with("No more data to display."));
        assert_eq!(shown_ids(&printed), vec!["id-0", "id-1", "id-2"]);
    }

    #[test]
    fn row_count_parsing() {
        assert_eq!(parse_row_count("7"), RowCount::Rows(7));
        assert_eq!(parse_row_count("+7"), RowCount::Rows(7));
        assert_eq!(parse_row_count("+123456789012345678901234"), RowCount::Rows(usize::MAX));
        assert_eq!(parse_row_count("0"), RowCount::NotPositive);
        assert_eq!(parse_row_count("-123456789012345678901234"), RowCount::NotPositive);
        assert_eq!(parse_row_count("+"), RowCount::NotInteger);
        assert_eq!(parse_row_count("1e3"), RowCount::NotInteger);
        assert_eq!(parse_row_count(""), RowCount::NotInteger);
    }

    #[test]
    fn non_ascii_cells_align_by_characters() {
        let mut table = rows(2);
        table.records[0].cells[0] = "Café Ñandú".to_string();
        let mut out = Vec::new();
        write_window(&mut out, &table, 0, 2).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let starts: Vec<usize> = printed
            .lines()
            .map(|line| line.chars().position(|c| c == '2' || c == 'S').unwrap())
            .collect();
        // "Start Time" and both timestamps begin in the same column.
        assert_eq!(starts[0], starts[1]);
        assert_eq!(starts[1], starts[2]);
    }

    #[test]
    fn window_lists_source_and_derived_columns() {
        let table = rows(2);
        let mut out = Vec::new();
        write_window(&mut out, &table, 1, 2).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let mut lines = printed.lines();
        assert_eq!(
            lines.next(),
            Some("   Id    Start Time           month  day_of_week  hour")
        );
        assert_eq!(
            lines.next(),
            Some("1  id-1  2017-02-14 09:00:00  feb    tue          9")
        );
        assert_eq!(lines.next(), None);
    }
}

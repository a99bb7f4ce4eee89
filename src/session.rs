use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::CityTable;
use crate::console::{Console, PromptError};
use crate::data::filter::{Choice, City, DAY_TOKENS, Filters, MONTH_TOKENS};
use crate::data::loader::load_data;
use crate::data::model::TripTable;
use crate::pager::Pager;
use crate::stats::{self, SEPARATOR};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

// ---------------------------------------------------------------------------
// Filter capture
// ---------------------------------------------------------------------------

/// Greet the user and ask for city, month and day.
pub fn capture_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Filters, PromptError> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city = console.choose(
        "Please enter city (Chicago, New York City, Washington): ",
        &City::ALL,
        "Invalid input. Please choose from Chicago, New York City, or Washington.",
    )?;
    let month = console.choose(
        "Please enter month (Jan, Feb, ..., Jun or all): ",
        &MONTH_TOKENS,
        "Invalid input. Please enter one of the following: Jan, Feb, Mar, Apr, May, Jun, or 'all'.",
    )?;
    let day = console.choose(
        "Please enter day of the week (Mon, Tue, ..., Sun or all): ",
        &DAY_TOKENS,
        "Invalid input. Please enter one of the following: Mon, Tue, Wed, Thu, Fri, Sat, Sun, or 'all'.",
    )?;

    console.say(SEPARATOR)?;

    Ok(Filters {
        city: *city,
        month: Choice::from_token(*month),
        day: Choice::from_token(*day),
    })
}

/// Print the four reports for one filtered table.
pub fn print_reports<W: Write>(out: &mut W, table: &TripTable) -> std::io::Result<()> {
    stats::print_timed(out, "Calculating The Most Frequent Times of Travel...", || {
        stats::time::time_stats(table)
    })?;
    stats::print_timed(out, "Calculating The Most Popular Stations And Trip...", || {
        stats::stations::station_stats(table)
    })?;
    stats::print_timed(out, "Calculating Trip Duration...", || {
        stats::duration::duration_stats(table)
    })?;
    stats::print_timed(out, "Calculating User Stats...", || {
        stats::users::user_stats(table)
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Session – filter, report, page, maybe restart
// ---------------------------------------------------------------------------

pub struct Session<'c, R, W> {
    console: Console<R, W>,
    cities: &'c CityTable,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(console: Console<R, W>, cities: &'c CityTable) -> Self {
        Self { console, cities }
    }

    /// Run explore iterations until the user declines to restart. Returns
    /// how many iterations ran.
    pub fn run(&mut self) -> Result<usize> {
        let mut iterations = 0;
        loop {
            self.explore_once()?;
            iterations += 1;

            let answer = match self.console.ask(RESTART_PROMPT) {
                Ok(answer) => answer,
                Err(PromptError::InputClosed) => String::new(),
                Err(err) => return Err(err.into()),
            };
            // `ask` trims the line, so " yes " also restarts.
            if !answer.eq_ignore_ascii_case("yes") {
                log::debug!("session ended after {iterations} iteration(s)");
                return Ok(iterations);
            }
        }
    }

    fn explore_once(&mut self) -> Result<()> {
        let filters = capture_filters(&mut self.console)?;
        log::debug!(
            "filters: city={}, month={}, day={}",
            filters.city,
            filters.month,
            filters.day
        );

        let table = load_data(self.cities.path(filters.city), &filters)?;
        print_reports(self.console.output(), &table)?;
        Pager::new(&table).run(&mut self.console)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

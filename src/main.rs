mod config;
mod console;
mod data;
mod pager;
mod session;
mod stats;

use std::io;

use config::CityTable;
use console::Console;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Warnings only by default so log lines don't interleave with prompts.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cities = CityTable::from_env()?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Session::new(console, &cities).run()?;
    Ok(())
}

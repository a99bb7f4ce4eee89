use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, n)`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Pick from `items`, earlier entries more likely.
    fn skewed<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let u = self.next_f64();
        items[((u * u) * items.len() as f64) as usize]
    }
}

/// Shape of one synthetic city file.
struct CitySample {
    file_name: &'static str,
    stations: &'static [&'static str],
    with_demographics: bool,
    fractional_durations: bool,
}

const CITIES: [CitySample; 3] = [
    CitySample {
        file_name: "chicago.csv",
        stations: &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
            "Millennium Park",
        ],
        with_demographics: true,
        fractional_durations: false,
    },
    CitySample {
        file_name: "new_york_city.csv",
        stations: &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "Broadway & E 22 St",
            "8 Ave & W 31 St",
        ],
        with_demographics: true,
        fractional_durations: false,
    },
    CitySample {
        file_name: "washington.csv",
        stations: &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "Smithsonian-National Mall / Jefferson Dr & 12th St SW",
        ],
        with_demographics: false,
        fractional_durations: true,
    },
];

const TRIPS_PER_CITY: u64 = 2000;

/// Seconds between 2017-01-01 and 2017-07-01.
const HALF_YEAR_SECS: u64 = 181 * 24 * 3600;

fn write_city(dir: &Path, city: &CitySample, rng: &mut SimpleRng) -> Result<PathBuf> {
    let path = dir.join(city.file_name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if city.with_demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    let epoch: NaiveDateTime = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("building epoch")?;

    let mut starts: Vec<NaiveDateTime> = (0..TRIPS_PER_CITY)
        .map(|_| epoch + Duration::seconds(rng.below(HALF_YEAR_SECS) as i64))
        .collect();
    starts.sort();

    for (id, start) in starts.into_iter().enumerate() {
        let whole = 60 + rng.below(3600);
        let duration = if city.fractional_durations {
            format!("{whole}.{:03}", rng.below(1000))
        } else {
            whole.to_string()
        };
        let end = start + Duration::seconds(whole as i64);

        let mut row = vec![
            (id * 7 + 1000).to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            duration,
            rng.skewed(city.stations).to_string(),
            rng.skewed(city.stations).to_string(),
            rng.skewed(&["Subscriber", "Customer"]).to_string(),
        ];
        if city.with_demographics {
            // Blank demographics for roughly one trip in ten, as in the real exports.
            if rng.below(10) == 0 {
                row.extend([String::new(), String::new()]);
            } else {
                row.push(rng.skewed(&["Male", "Female"]).to_string());
                row.push(format!("{}.0", 1940 + rng.below(62)));
            }
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(path)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for city in &CITIES {
        let path = write_city(&dir, city, &mut rng)?;
        println!("Wrote {TRIPS_PER_CITY} trips to {}", path.display());
    }
    Ok(())
}

/// Data layer: trip records, loading, and filtering.
///
/// Architecture:
/// ```text
///   chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → TripTable, derive month / day / hour
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  TripTable    │  Vec<TripRecord>, headers, optional-column flags
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month / day equality → filtered TripTable
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;

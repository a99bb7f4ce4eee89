use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::filter::City;

/// Directory the default city files are resolved against.
pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";

/// Optional JSON file mapping city tokens to file paths.
pub const CITIES_VAR: &str = "BIKESHARE_CITIES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading city overrides from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing city overrides in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown city '{0}' in city overrides")]
    UnknownCity(String),
}

// ---------------------------------------------------------------------------
// CityTable – city → backing file
// ---------------------------------------------------------------------------

/// Immutable lookup of the trip file backing each city. Built once at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTable {
    paths: [PathBuf; 3],
}

impl CityTable {
    /// Default file names, resolved against `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            paths: City::ALL.map(|city| data_dir.join(default_file_name(city))),
        }
    }

    /// Build from `BIKESHARE_DATA_DIR` and `BIKESHARE_CITIES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var_os(DATA_DIR_VAR).map(PathBuf::from);
        let overrides = std::env::var_os(CITIES_VAR).map(PathBuf::from);
        Self::resolve(data_dir, overrides.as_deref())
    }

    /// Defaults under `data_dir` (or the working directory), then overrides.
    pub fn resolve(data_dir: Option<PathBuf>, overrides: Option<&Path>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.unwrap_or_else(|| PathBuf::from("."));
        let mut table = Self::new(&data_dir);
        if let Some(path) = overrides {
            table.apply_overrides(&data_dir, path)?;
        }
        Ok(table)
    }

    fn apply_overrides(&mut self, data_dir: &Path, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: BTreeMap<String, PathBuf> =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for (token, file) in entries {
            let city = City::from_token(&token.to_lowercase())
                .ok_or_else(|| ConfigError::UnknownCity(token.clone()))?;
            let resolved = data_dir.join(file);
            log::info!("{city} trips read from {}", resolved.display());
            self.paths[city as usize] = resolved;
        }
        Ok(())
    }

    /// File backing `city`.
    pub fn path(&self, city: City) -> &Path {
        &self.paths[city as usize]
    }
}

fn default_file_name(city: City) -> &'static str {
    match city {
        City::Chicago => "chicago.csv",
        City::NewYorkCity => "new_york_city.csv",
        City::Washington => "washington.csv",
    }
}

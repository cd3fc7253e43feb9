use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::pipeline::FilterScope;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bikeshare.json";
pub const DAILY_ENV: &str = "BIKESHARE_DAILY";
pub const HOURLY_ENV: &str = "BIKESHARE_HOURLY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub daily_path: PathBuf,
    pub hourly_path: PathBuf,
    pub filter_scope: FilterScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_path: PathBuf::from("data/day.csv"),
            hourly_path: PathBuf::from("data/hour.csv"),
            filter_scope: FilterScope::default(),
        }
    }
}

impl Config {
    /// Parse a JSON config file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parsing config file '{}'", path.display()))
    }

    /// Resolve the startup config: explicit path, then `bikeshare.json` if
    /// present, then defaults.  Path environment variables win over all three.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with(
            explicit,
            Path::new(DEFAULT_CONFIG_FILE),
            env::var_os(DAILY_ENV),
            env::var_os(HOURLY_ENV),
        )
    }

    fn resolve_with(
        explicit: Option<&Path>,
        default_file: &Path,
        daily: Option<OsString>,
        hourly: Option<OsString>,
    ) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if default_file.is_file() => Self::load(default_file)?,
            None => Self::default(),
        };
        config.apply_overrides(daily, hourly);
        Ok(config)
    }

    fn apply_overrides(&mut self, daily: Option<OsString>, hourly: Option<OsString>) {
        if let Some(p) = daily {
            self.daily_path = PathBuf::from(p);
        }
        if let Some(p) = hourly {
            self.hourly_path = PathBuf::from(p);
        }
    }
}

// src/config/options.rs

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::consts::{DEFAULT_DB_FILE, DEFAULT_LOCATION, DEFAULT_PLOT_DIR};

/// Where the database lives and which location label rows are filed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub db_path: PathBuf,
    pub location: String,
    pub plot_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            location: DEFAULT_LOCATION.to_string(),
            plot_dir: PathBuf::from(DEFAULT_PLOT_DIR),
        }
    }
}

/// Where the backward month walk begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub start: NaiveDate,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { start: Local::now().date_naive() }
    }
}

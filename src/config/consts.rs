// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://climate.weather.gc.ca/climate_data/daily_data_e.html";
pub const STATION_ID: u32 = 27174; // Winnipeg A CS
pub const TIMEFRAME: u32 = 2; // daily
pub const START_DAY: u32 = 1;
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 300; // be polite
pub const MIN_ROW_CELLS: usize = 4; // day, max, min, mean

// Store
pub const DEFAULT_DB_FILE: &str = "weather.db";
pub const DEFAULT_LOCATION: &str = "Winnipeg";

// Plots
pub const DEFAULT_PLOT_DIR: &str = "plots";
pub const PLOT_WIDTH: u32 = 960;
pub const PLOT_HEIGHT: u32 = 600;

// src/data.rs
//
// Record types shared by the scrape, store, and plot layers.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One day's temperatures as scraped from a month page.
/// Field names follow the store columns; the raw table column order
/// (max, min, mean) is handled where the cells are parsed, not here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyReading {
    pub max_temp: f64,
    pub min_temp: f64,
    pub mean_temp: f64,
}

/// Consolidated scrape output, keyed and ordered by date.
pub type History = BTreeMap<NaiveDate, DailyReading>;

/// One fetched row as handed to consumers (plotting and friends).
/// Temps are nullable because the schema allows NULL; rows written by this
/// program always carry all three.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherRow {
    pub date: NaiveDate,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
}

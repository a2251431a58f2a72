// src/store.rs

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{Connection, Transaction, params, types::ToSql};

use crate::config::consts::DEFAULT_DB_FILE;
use crate::data::{History, WeatherRow};
use crate::error::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS weather (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    weather_date TEXT NOT NULL,
    location TEXT NOT NULL,
    min_temp REAL,
    max_temp REAL,
    avg_temp REAL,
    UNIQUE (weather_date, location)
);
";

/// Durable, idempotent persistence for daily readings.
///
/// Holds only the database path; every operation runs in its own scoped
/// connection: open, begin transaction, work, commit on clean exit. If the
/// closure errors, the dropped [`Transaction`] rolls back and the
/// connection still closes exactly once.
pub struct WeatherStore {
    path: PathBuf,
}

impl WeatherStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::open(DEFAULT_DB_FILE)
    }

    fn with_tx<T>(
        &self,
        f: impl FnOnce(&Transaction) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = Connection::open(&self.path)?;
        let tx = conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Create the table if absent. Safe to call repeatedly; existing rows
    /// are untouched.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::DbDir(parent.to_path_buf(), e))?;
            }
        }
        self.with_tx(|tx| {
            tx.execute_batch(SCHEMA)?;
            Ok(())
        })
    }

    /// Delete all rows, keep the schema. Used before a full re-download.
    pub fn purge(&self) -> Result<(), StoreError> {
        self.with_tx(|tx| {
            tx.execute("DELETE FROM weather", [])?;
            Ok(())
        })
    }

    /// Insert the scraped records for one location. Conflict policy is
    /// IGNORE: a row already present for (date, location) keeps its
    /// first-written values, so re-saving overlapping data is a no-op.
    /// Returns how many rows were actually inserted.
    pub fn save(&self, records: &History, location: &str) -> Result<usize, StoreError> {
        self.with_tx(|tx| {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO weather \
                 (weather_date, location, min_temp, max_temp, avg_temp) \
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            let mut inserted = 0;
            for (date, r) in records {
                inserted += stmt.execute(params![
                    date,
                    location,
                    r.min_temp,
                    r.max_temp,
                    r.mean_temp
                ])?;
            }
            Ok(inserted)
        })
    }

    /// All rows for the location, ordered ascending by date. Bounds are
    /// inclusive; an omitted bound imposes no filter.
    pub fn fetch(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        location: &str,
    ) -> Result<Vec<WeatherRow>, StoreError> {
        self.with_tx(|tx| {
            let mut sql = String::from(
                "SELECT weather_date, min_temp, max_temp, avg_temp \
                 FROM weather WHERE location = ?",
            );
            let mut args: Vec<&dyn ToSql> = vec![&location];
            if let Some(ref s) = start {
                sql.push_str(" AND weather_date >= ?");
                args.push(s);
            }
            if let Some(ref e) = end {
                sql.push_str(" AND weather_date <= ?");
                args.push(e);
            }
            sql.push_str(" ORDER BY weather_date ASC");

            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(args.as_slice(), |row| {
                Ok(WeatherRow {
                    date: row.get(0)?,
                    min_temp: row.get(1)?,
                    max_temp: row.get(2)?,
                    avg_temp: row.get(3)?,
                })
            })?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
    }
}

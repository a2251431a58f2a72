// src/scrape/daily.rs

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::html::RowExtractor;
use crate::data::{DailyReading, History};

/// Why an extracted row was left out of the month's records.
/// Carried as data rather than a bare skip so the decision is auditable.
#[derive(Debug, Error, PartialEq)]
pub enum RowSkip {
    #[error("day cell '{day}' is not a day of {year:04}-{month:02}")]
    BadDay { day: String, year: i32, month: u32 },

    #[error("{field} cell '{value}' is not a number")]
    BadNumber { field: &'static str, value: String },
}

/// Parse one station/month page into date-keyed readings.
///
/// Year and month are threaded in explicitly; nothing here depends on
/// parser-global state, so call order cannot corrupt dates.
pub fn parse_month_page(doc: &str, year: i32, month: u32) -> History {
    let mut extractor = RowExtractor::new();
    extractor.feed(doc);

    let mut out = History::new();
    for row in extractor.into_rows() {
        match parse_row(&row, year, month) {
            Ok((date, reading)) => {
                out.insert(date, reading);
            }
            Err(skip) => log::debug!("dropping row starting '{}': {skip}", row[0]),
        }
    }
    out
}

/// Raw cell order is day, max, min, mean — note max before min.
/// Any field failure drops this row only. Callers guarantee ≥ 4 cells
/// (the extractor never yields fewer).
fn parse_row(cells: &[String], year: i32, month: u32) -> Result<(NaiveDate, DailyReading), RowSkip> {
    let bad_day = || RowSkip::BadDay { day: cells[0].clone(), year, month };
    let day: u32 = cells[0].parse().map_err(|_| bad_day())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad_day)?;

    let max_temp = parse_temp("max", &cells[1])?;
    let min_temp = parse_temp("min", &cells[2])?;
    let mean_temp = parse_temp("mean", &cells[3])?;

    Ok((date, DailyReading { max_temp, min_temp, mean_temp }))
}

fn parse_temp(field: &'static str, cell: &str) -> Result<f64, RowSkip> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| RowSkip::BadNumber { field, value: cell.to_string() })
}

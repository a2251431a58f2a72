// src/scrape/history.rs

use std::thread;
use std::time::Duration;

use chrono::Datelike;
use reqwest::blocking::Client;

use crate::config::consts::{BASE_URL, REQUEST_PAUSE_MS, START_DAY, STATION_ID, TIMEFRAME};
use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::data::History;
use crate::error::FetchError;
use crate::progress::Progress;

use super::daily::parse_month_page;

/// One month page of markup, by calendar position.
/// A seam rather than a direct call so tests can drive the walk with
/// canned pages.
pub trait MonthSource {
    fn fetch_month(&self, year: i32, month: u32) -> Result<String, FetchError>;
}

/// The live climate site.
pub struct ClimateSite {
    client: Client,
    station_id: u32,
}

impl ClimateSite {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self { client: net::client()?, station_id: STATION_ID })
    }

    fn month_url(&self, year: i32, month: u32) -> String {
        format!(
            "{BASE_URL}?StationID={}&timeframe={TIMEFRAME}&Day={START_DAY}&Year={year}&Month={month}",
            self.station_id
        )
    }
}

impl MonthSource for ClimateSite {
    fn fetch_month(&self, year: i32, month: u32) -> Result<String, FetchError> {
        net::get(&self.client, &self.month_url(year, month))
    }
}

/// Walk month pages backward from the start date until the source runs dry,
/// merging every page's records into one date-keyed map.
///
/// Termination is deliberately blunt: a failed or empty fetch, or a page
/// with zero usable records, ends the walk and whatever accumulated so far
/// is the result. There is no retry and no distinction between "network
/// down" and "history exhausted".
pub fn collect_history(
    source: &dyn MonthSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> History {
    let mut all = History::new();
    let mut year = opts.start.year();
    let mut month = opts.start.month();

    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    loop {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Checking {year:04}-{month:02}"));
        }

        let doc = match source.fetch_month(year, month) {
            Ok(doc) if !doc.is_empty() => doc,
            Ok(_) => {
                log::info!("empty page at {year:04}-{month:02}, stopping");
                break;
            }
            Err(e) => {
                log::info!("fetch failed at {year:04}-{month:02} ({e}), stopping");
                break;
            }
        };

        let page = parse_month_page(&doc, year, month);
        if page.is_empty() {
            log::info!("no usable records at {year:04}-{month:02}, stopping");
            break;
        }

        let count = page.len();
        all.extend(page); // on a date collision the later-processed page wins
        if let Some(p) = progress.as_deref_mut() {
            p.month_done(year, month, count);
        }

        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }

        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(all.len());
    }
    all
}

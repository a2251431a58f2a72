// tests/scrape_driver.rs
//
// Drives the backward month walk with canned pages instead of the live
// site, via the MonthSource seam.

use std::cell::RefCell;

use chrono::NaiveDate;
use wx_scrape::config::options::ScrapeOptions;
use wx_scrape::error::FetchError;
use wx_scrape::scrape::{MonthSource, collect_history};

/// Hands out pages in call order and records which (year, month) was asked.
struct CannedSource {
    pages: Vec<Option<&'static str>>,
    calls: RefCell<Vec<(i32, u32)>>,
}

impl CannedSource {
    fn new(pages: Vec<Option<&'static str>>) -> Self {
        Self { pages, calls: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(i32, u32)> {
        self.calls.borrow().clone()
    }
}

impl MonthSource for CannedSource {
    fn fetch_month(&self, year: i32, month: u32) -> Result<String, FetchError> {
        let mut calls = self.calls.borrow_mut();
        let i = calls.len();
        calls.push((year, month));
        match self.pages.get(i) {
            Some(Some(doc)) => Ok((*doc).to_string()),
            Some(None) | None => Err(FetchError::Status {
                status: 404,
                url: format!("canned://{year:04}-{month:02}"),
            }),
        }
    }
}

fn opts(year: i32, month: u32) -> ScrapeOptions {
    ScrapeOptions { start: NaiveDate::from_ymd_opt(year, month, 15).unwrap() }
}

const MARCH_PAGE: &str = "
    <table>
      <tr><th>DAY</th><th>MAX</th><th>MIN</th><th>MEAN</th></tr>
      <tr><td>5</td><td>3.1</td><td>-8.4</td><td>-2.6</td></tr>
      <tr><td>6</td><td>4.0</td><td>-6.0</td><td>-1.0</td></tr>
    </table>";

const ALL_MISSING_PAGE: &str = "
    <table>
      <tr><td>1</td><td>M</td><td>M</td><td>M</td></tr>
      <tr><td>2</td><td>M</td><td>M</td><td>M</td></tr>
    </table>";

#[test]
fn failed_fetch_stops_after_merging_earlier_pages() {
    let source = CannedSource::new(vec![Some(MARCH_PAGE), None]);
    let history = collect_history(&source, &opts(2024, 3), None);

    assert_eq!(source.calls(), vec![(2024, 3), (2024, 2)]);
    assert_eq!(history.len(), 2);
    let d5 = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(history[&d5].mean_temp, -2.6);
}

#[test]
fn empty_body_means_no_more_history() {
    let source = CannedSource::new(vec![Some("")]);
    let history = collect_history(&source, &opts(2024, 3), None);
    assert!(history.is_empty());
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn page_with_zero_usable_records_stops_the_walk() {
    let source = CannedSource::new(vec![Some(MARCH_PAGE), Some(ALL_MISSING_PAGE), Some(MARCH_PAGE)]);
    let history = collect_history(&source, &opts(2024, 3), None);

    // the all-missing February page terminates; January is never fetched
    assert_eq!(source.calls(), vec![(2024, 3), (2024, 2)]);
    assert_eq!(history.len(), 2);
}

#[test]
fn cursor_wraps_december_with_year_decrement() {
    let source = CannedSource::new(vec![Some(MARCH_PAGE), Some(MARCH_PAGE), None]);
    let history = collect_history(&source, &opts(2024, 1), None);

    assert_eq!(source.calls(), vec![(2024, 1), (2023, 12), (2023, 11)]);
    // same day cells under different months stay distinct dates
    assert_eq!(history.len(), 4);
    assert!(history.contains_key(&NaiveDate::from_ymd_opt(2023, 12, 5).unwrap()));
}

#[test]
fn column_order_is_max_min_mean() {
    // the raw table lists max before min; a swap here would silently
    // corrupt every stored reading
    let source = CannedSource::new(vec![Some(MARCH_PAGE), None]);
    let history = collect_history(&source, &opts(2024, 3), None);

    let r = history[&NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()];
    assert_eq!(r.max_temp, 3.1);
    assert_eq!(r.min_temp, -8.4);
    assert_eq!(r.mean_temp, -2.6);
}

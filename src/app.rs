// src/app.rs
//
// Frontend-agnostic command layer: the menu loop and the one-shot command
// bodies both go through these methods. Scrape/store/plot failures are
// reported, never propagated past the menu.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Local;

use crate::config::options::{AppOptions, ScrapeOptions};
use crate::data::History;
use crate::error::AppError;
use crate::plot;
use crate::progress::Progress;
use crate::scrape::{self, MonthSource};
use crate::store::WeatherStore;

/// Prints one line per month as the walk moves backward.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn month_done(&mut self, year: i32, month: u32, records: usize) {
        println!("  {year:04}-{month:02}: {records} records");
    }
    fn finish(&mut self, total: usize) {
        println!("{total} records scraped");
    }
}

pub struct App {
    store: WeatherStore,
    opts: AppOptions,
}

impl App {
    /// Open the store and make sure the schema exists.
    pub fn new(opts: AppOptions) -> Result<Self, AppError> {
        let store = WeatherStore::open(&opts.db_path);
        store.initialize()?;
        Ok(Self { store, opts })
    }

    /// Purge and re-download the full history.
    pub fn download_all(&self, source: &dyn MonthSource) -> Result<(), AppError> {
        println!("Downloading all data");
        self.store.purge()?;
        let data = self.scrape(source);
        let inserted = self.store.save(&data, &self.opts.location)?;
        println!("{} records downloaded, {inserted} stored", data.len());
        Ok(())
    }

    /// Re-scrape and fill in anything newer than the stored history.
    /// Relies on the idempotent save; existing rows keep their
    /// first-written values.
    pub fn update(&self, source: &dyn MonthSource) -> Result<(), AppError> {
        let rows = self.store.fetch(None, None, &self.opts.location)?;
        let Some(latest) = rows.last().map(|r| r.date) else {
            println!("No pre-existing data, please download data first");
            return Ok(());
        };
        if latest == Local::now().date_naive() {
            println!("Database is already up to date");
            return Ok(());
        }
        println!("Updating data from {latest} to today");
        let data = self.scrape(source);
        let inserted = self.store.save(&data, &self.opts.location)?;
        println!("Update complete, {inserted} new records");
        Ok(())
    }

    pub fn boxplot(&self, start_year: i32, end_year: i32) -> Result<PathBuf, AppError> {
        let rows = self.store.fetch(None, None, &self.opts.location)?;
        let out = self.plot_path(format!("boxplot_{start_year}_{end_year}.png"))?;
        plot::monthly_boxplot(&rows, start_year, end_year, &out)?;
        Ok(out)
    }

    pub fn lineplot(&self, year: i32, month: u32) -> Result<PathBuf, AppError> {
        let rows = self.store.fetch(None, None, &self.opts.location)?;
        let out = self.plot_path(format!("lineplot_{year:04}_{month:02}.png"))?;
        plot::daily_lineplot(&rows, year, month, &out)?;
        Ok(out)
    }

    /// Interactive menu. Individual command failures are printed and the
    /// loop continues; only exit (or closed stdin) leaves it.
    pub fn menu(&self, source: &dyn MonthSource) -> Result<(), AppError> {
        let stdin = io::stdin();
        loop {
            println!();
            println!("--- {} weather ---", self.opts.location);
            println!("1. Download all data");
            println!("2. Update data");
            println!("3. Generate box plot");
            println!("4. Generate line plot");
            println!("5. Exit");

            let Some(choice) = prompt(&stdin, "Select an option: ")? else {
                return Ok(()); // stdin closed
            };
            match choice.as_str() {
                "1" => report(self.download_all(source)),
                "2" => report(self.update(source)),
                "3" => {
                    let (Some(start_year), Some(end_year)) = (
                        prompt_parse::<i32>(&stdin, "Start year: ")?,
                        prompt_parse::<i32>(&stdin, "End year: ")?,
                    ) else {
                        continue;
                    };
                    report_plot(self.boxplot(start_year, end_year));
                }
                "4" => {
                    let (Some(year), Some(month)) = (
                        prompt_parse::<i32>(&stdin, "Year: ")?,
                        prompt_parse::<u32>(&stdin, "Month (1-12): ")?,
                    ) else {
                        continue;
                    };
                    report_plot(self.lineplot(year, month));
                }
                "5" => {
                    println!("Exiting");
                    return Ok(());
                }
                _ => println!("Please select another option"),
            }
        }
    }

    fn plot_path(&self, file: String) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.opts.plot_dir)?;
        Ok(self.opts.plot_dir.join(file))
    }

    fn scrape(&self, source: &dyn MonthSource) -> History {
        let mut progress = ConsoleProgress;
        scrape::collect_history(source, &ScrapeOptions::default(), Some(&mut progress))
    }
}

/* ---------- console helpers ---------- */

fn report(result: Result<(), AppError>) {
    if let Err(e) = result {
        println!("Error: {e}");
    }
}

fn report_plot(result: Result<PathBuf, AppError>) {
    match result {
        Ok(path) => println!("Saved {}", path.display()),
        Err(e) => println!("Error: {e}"),
    }
}

/// Read one trimmed line. `None` means stdin was closed.
fn prompt(stdin: &io::Stdin, msg: &str) -> Result<Option<String>, AppError> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but parsed. `None` (with a message) on bad input or EOF.
fn prompt_parse<T: FromStr>(stdin: &io::Stdin, msg: &str) -> Result<Option<T>, AppError> {
    let Some(line) = prompt(stdin, msg)? else {
        return Ok(None);
    };
    match line.parse() {
        Ok(v) => Ok(Some(v)),
        Err(_) => {
            println!("Not a valid number: {line}");
            Ok(None)
        }
    }
}

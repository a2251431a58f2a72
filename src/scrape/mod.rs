// src/scrape/mod.rs
mod daily;
mod history;

pub use daily::{RowSkip, parse_month_page};
pub use history::{ClimateSite, MonthSource, collect_history};

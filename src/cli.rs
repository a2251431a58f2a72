// src/cli.rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::App;
use crate::config::consts::{DEFAULT_DB_FILE, DEFAULT_LOCATION, DEFAULT_PLOT_DIR};
use crate::config::options::AppOptions;
use crate::error::AppError;
use crate::scrape::ClimateSite;

#[derive(Parser)]
#[command(
    name = "wx_scrape",
    version,
    about = "Scrape daily weather into a local store and chart it"
)]
pub struct Cli {
    /// Database file
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Location label rows are filed under
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Directory charts are written to
    #[arg(long, default_value = DEFAULT_PLOT_DIR)]
    pub plot_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Purge the store and download the full history
    Download,
    /// Re-scrape and store anything new
    Update,
    /// Box plot of mean temperatures per month over a year range
    BoxPlot {
        #[arg(long)]
        start_year: i32,
        #[arg(long)]
        end_year: i32,
    },
    /// Line plot of mean temperatures for one month
    LinePlot {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
}

/// One-shot command, or the interactive menu when none was given.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let opts = AppOptions {
        db_path: cli.db,
        location: cli.location,
        plot_dir: cli.plot_dir,
    };
    let app = App::new(opts)?;
    let site = ClimateSite::new()?;

    match cli.command {
        None => app.menu(&site),
        Some(Command::Download) => app.download_all(&site),
        Some(Command::Update) => app.update(&site),
        Some(Command::BoxPlot { start_year, end_year }) => {
            let path = app.boxplot(start_year, end_year)?;
            println!("Saved {}", path.display());
            Ok(())
        }
        Some(Command::LinePlot { year, month }) => {
            let path = app.lineplot(year, month)?;
            println!("Saved {}", path.display());
            Ok(())
        }
    }
}

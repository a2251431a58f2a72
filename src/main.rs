// src/main.rs

use anyhow::Result;
use clap::Parser;

use wx_scrape::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    cli::run(cli)?;
    Ok(())
}

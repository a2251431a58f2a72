// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Page fetch failures. The driver treats every variant as "no more
/// history" and stops the walk, so none of these propagate past it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not create database directory '{}'", .0.display())]
    DbDir(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no readings in the requested range")]
    NoData,

    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Application-level error for the menu and one-shot commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// src/core/net.rs

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::FETCH_TIMEOUT_SECS;
use crate::error::FetchError;

/// Build the one client the scraper uses. The timeout bounds the only
/// operation in the program that can block for long.
pub fn client() -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(concat!("wx_scrape/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// GET one page and return the body as text. Decoding is permissive:
/// invalid byte sequences are replaced, not fatal.
pub fn get(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
    }
    Ok(resp.text()?)
}

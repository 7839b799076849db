//! HTTP client wrapper - the two calls against the entries collection

use std::time::Duration;

use crate::error::{EntryError, Result};
use crate::models::Entry;

/// GET the collection and decode it as a list of entries
pub async fn fetch_entries(client: &reqwest::Client, url: &str) -> Result<Vec<Entry>> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(EntryError::Server {
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    let entries = serde_json::from_str::<Vec<Entry>>(&body)?;
    Ok(entries)
}

/// POST one entry to the collection. The response body is not read.
pub async fn create_entry(client: &reqwest::Client, url: &str, entry: &Entry) -> Result<u16> {
    let resp = client.post(url).json(entry).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(EntryError::Server {
            status: status.as_u16(),
        });
    }
    Ok(status.as_u16())
}

/// Create an HTTP client with the given per-request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

// src/net.rs
//
// Blocking GET with redirect resolution. One request in flight at a time;
// the resolution loop re-issues fresh URLs, it never retries this layer.
use reqwest::blocking::Client;

use crate::error::ScrapeError;
use crate::params::{REQUEST_TIMEOUT, USER_AGENT};

pub struct FetchedPage {
    /// URL after any redirects, e.g. `/w/Drag_dag` → `/w/Dragon_dagger`.
    pub final_url: String,
    pub html: String,
}

pub fn fetch(url: &str) -> Result<FetchedPage, ScrapeError> {
    logf!("GET {url}");

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(url).send()?;
    let final_url = response.url().to_string();

    let response = response.error_for_status().inspect_err(|e| {
        loge!("fetch failed: {e}");
    })?;
    let html = response.text()?;

    logd!("got {} bytes, final url {final_url}", html.len());
    Ok(FetchedPage { final_url, html })
}

// src/core/net.rs

// Blocking HTTPS GET, one request per call.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let url = join!(BASE_URL, path);

    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

//! News site scrapers that turn a listing page into article documents.
//!
//! This module contains submodules for scraping the supported news sites.
//! Each scraper follows a consistent two-phase pattern:
//!
//! 1. **Indexing**: Discover article URLs from the site's listing page
//! 2. **Fetching**: Download and extract article text from each URL
//!
//! # Supported Sites
//!
//! | Site | Module | Links | Notes |
//! |------|--------|-------|-------|
//! | France 24 | [`france24`] | Relative, joined on the base URL | Lead paragraph + article body |
//! | Kompas Bola | [`kompas`] | Absolute, `page=all` query added | Article body only |
//!
//! # Common Patterns
//!
//! Each scraper module exports:
//! - `index_articles(client)`: Returns a list of article URLs
//! - `fetch_articles(client, urls)`: Fetches the URLs one at a time, returns raw article texts
//!
//! Scrapers share one [`reqwest::Client`] built by [`build_client`] and
//! fetch strictly sequentially. A page missing its expected content element
//! is logged and skipped; a network failure aborts the whole batch.

use reqwest::Client;
use std::error::Error;
use std::time::Duration;

pub mod france24;
pub mod kompas;

/// Browser-like user agent; both sites serve different markup to obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Build the HTTP client shared by both scrape phases.
///
/// The client carries the browser-like [`USER_AGENT`] and a per-request
/// timeout so an unresponsive host fails the run instead of hanging it.
pub fn build_client(timeout_secs: u64) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

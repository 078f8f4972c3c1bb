//! France 24 article scraper.
//!
//! This module scrapes articles from the [France 24](https://www.france24.com)
//! English front page. Articles are linked from the page-builder container
//! with site-relative URLs that are resolved against the base URL.
//!
//! # Page Structure
//!
//! An article page carries a lead paragraph (`p.t-content__chapo`) followed
//! by the body container (`div.t-content__body.u-clearfix`). Pages without
//! the lead paragraph are not articles (live tickers, video pages) and are
//! skipped; a missing body on an actual article page is treated as an error.

use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt, TryStreamExt};
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

const LISTING_URL: &str = "https://www.france24.com";
const LISTING_CONTAINER: &str = "div.t-content.t-content--page-builder";
const LEAD_PARAGRAPH: &str = "p.t-content__chapo";
const BODY_CONTAINER: &str = "div.t-content__body.u-clearfix";

/// Index the France 24 front page to extract article URLs.
///
/// Scrapes the front page and collects the `href` of every anchor inside
/// the listing container, resolved to an absolute URL.
///
/// # Returns
///
/// A deduplicated vector of absolute article URLs, or an error if the
/// front page fetch fails or the listing container is missing.
#[instrument(level = "info", skip_all)]
pub async fn index_articles(client: &Client) -> Result<Vec<String>, Box<dyn Error>> {
    let base_url = Url::parse(LISTING_URL)?;

    let html = client.get(LISTING_URL).send().await?.text().await?;
    let article_urls = extract_links(&html, &base_url)?;

    info!(
        count = article_urls.len(),
        source = LISTING_URL,
        "Indexed France 24 article URLs"
    );
    debug!(urls = ?article_urls, "France 24 URLs");

    Ok(article_urls)
}

/// Fetch all France 24 articles, one at a time.
///
/// Downloads and parses article content from each URL in order. Pages
/// without a lead paragraph are skipped; any network failure fails the
/// whole batch.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `urls` - Vector of article URLs to fetch
///
/// # Returns
///
/// The raw article texts, in URL order, skipped pages omitted.
#[instrument(level = "info", skip_all)]
pub async fn fetch_articles(
    client: &Client,
    urls: Vec<String>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let total = urls.len();
    let documents: Vec<String> = stream::iter(urls.into_iter().enumerate())
        .then(|(position, url)| async move {
            info!(position, total, %url, "Fetching France 24 article");
            fetch_article(client, &url).await
        })
        .try_filter_map(|document| std::future::ready(Ok(document)))
        .try_collect()
        .await?;

    info!(count = documents.len(), "Fetched France 24 article contents");
    Ok(documents)
}

/// Fetch a single France 24 article
#[instrument(level = "info", skip_all, fields(%url))]
async fn fetch_article(client: &Client, url: &str) -> Result<Option<String>, Box<dyn Error>> {
    let body = client.get(url).send().await?.text().await?;
    extract_document(&body, url)
}

/// Collect the anchors inside the listing container, resolved against the
/// base URL. Fails when the container itself is absent from the page.
fn extract_links(html: &str, base_url: &Url) -> Result<Vec<String>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let container_selector = Selector::parse(LISTING_CONTAINER)?;
    let anchor_selector = Selector::parse("a[href]")?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| format!("listing container {LISTING_CONTAINER:?} not found on {LISTING_URL}"))?;

    let article_urls = container
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base_url.join(href).ok())
        .map(|resolved| resolved.to_string())
        .unique()
        .collect();

    Ok(article_urls)
}

/// Extract the article text: the lead paragraph followed by every paragraph
/// of the body container, joined with spaces.
fn extract_document(html: &str, url: &str) -> Result<Option<String>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let lead_selector = Selector::parse(LEAD_PARAGRAPH)?;
    let body_selector = Selector::parse(BODY_CONTAINER)?;
    let paragraph_selector = Selector::parse("p")?;

    let lead = match document.select(&lead_selector).next() {
        Some(lead) => lead,
        None => {
            warn!("Page has no lead paragraph, skipping");
            return Ok(None);
        }
    };

    let body = document
        .select(&body_selector)
        .next()
        .ok_or_else(|| format!("article body {BODY_CONTAINER:?} not found on {url}"))?;

    let mut sentences = vec![lead.text().collect::<Vec<_>>().join(" ")];
    for paragraph in body.select(&paragraph_selector) {
        sentences.push(paragraph.text().collect::<Vec<_>>().join(" "));
    }
    let content = sentences.join(" ");

    info!(
        bytes = content.len(),
        preview = %truncate_for_log(&content, 80),
        "Parsed France 24 article"
    );
    Ok(Some(content))
}

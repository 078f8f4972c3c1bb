//! Kompas Bola article scraper.
//!
//! Scrapes the most-read box of [Kompas Bola](https://bola.kompas.com).
//! Links there are already absolute; each one gets the `page=all` query so
//! the whole article arrives in one page instead of paginated slices.

use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt, TryStreamExt};
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

const LISTING_URL: &str = "https://bola.kompas.com";
const LISTING_CONTAINER: &str = "div.most__wrap";
const CONTENT_CONTAINER: &str = "div.read__content";

/// Index the Kompas Bola most-read box to extract article URLs.
#[instrument(level = "info", skip_all)]
pub async fn index_articles(client: &Client) -> Result<Vec<String>, Box<dyn Error>> {
    let html = client.get(LISTING_URL).send().await?.text().await?;
    let article_urls = extract_links(&html)?;

    info!(
        count = article_urls.len(),
        source = LISTING_URL,
        "Indexed Kompas article URLs"
    );
    debug!(urls = ?article_urls, "Kompas URLs");

    Ok(article_urls)
}

/// Fetch all Kompas articles, one at a time.
///
/// Pages without the article content container are skipped; any network
/// failure fails the whole batch.
#[instrument(level = "info", skip_all)]
pub async fn fetch_articles(
    client: &Client,
    urls: Vec<String>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let total = urls.len();
    let documents: Vec<String> = stream::iter(urls.into_iter().enumerate())
        .then(|(position, url)| async move {
            info!(position, total, %url, "Fetching Kompas article");
            fetch_article(client, &url).await
        })
        .try_filter_map(|document| std::future::ready(Ok(document)))
        .try_collect()
        .await?;

    info!(count = documents.len(), "Fetched Kompas article contents");
    Ok(documents)
}

/// Fetch a single Kompas article
#[instrument(level = "info", skip_all, fields(%url))]
async fn fetch_article(client: &Client, url: &str) -> Result<Option<String>, Box<dyn Error>> {
    let body = client.get(url).send().await?.text().await?;
    extract_document(&body)
}

/// Collect the anchors inside the most-read container, each rewritten to
/// carry the `page=all` query. Fails when the container is absent.
fn extract_links(html: &str) -> Result<Vec<String>, Box<dyn Error>> {
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
        .filter_map(|href| Url::parse(href).ok())
        .map(|mut resolved| {
            resolved.set_query(Some("page=all"));
            resolved.to_string()
        })
        .unique()
        .collect();

    Ok(article_urls)
}

/// Extract the article text: every paragraph of the content container,
/// joined with spaces.
fn extract_document(html: &str) -> Result<Option<String>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse(CONTENT_CONTAINER)?;
    let paragraph_selector = Selector::parse("p")?;

    let container = match document.select(&content_selector).next() {
        Some(container) => container,
        None => {
            warn!("Page has no article content, skipping");
            return Ok(None);
        }
    };

    let sentences: Vec<String> = container
        .select(&paragraph_selector)
        .map(|paragraph| paragraph.text().collect::<Vec<_>>().join(" "))
        .collect();
    let content = sentences.join(" ");

    info!(
        bytes = content.len(),
        preview = %truncate_for_log(&content, 80),
        "Parsed Kompas article"
    );
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_FIXTURE: &str = r#"
        <html><body>
        <div class="most__wrap">
            <a href="https://bola.kompas.com/read/2024/01/01/derby-report">Derby</a>
            <a href="https://bola.kompas.com/read/2024/01/02/transfer-news">Transfer</a>
            <a href="https://bola.kompas.com/read/2024/01/01/derby-report">Derby again</a>
        </div>
        <a href="https://bola.kompas.com/read/elsewhere">Outside</a>
        </body></html>
    "#;

    #[test]
    fn test_extract_links_adds_page_all_and_dedupes() {
        let links = extract_links(LISTING_FIXTURE).unwrap();

        assert_eq!(
            links,
            vec![
                "https://bola.kompas.com/read/2024/01/01/derby-report?page=all".to_string(),
                "https://bola.kompas.com/read/2024/01/02/transfer-news?page=all".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_links_missing_container_is_error() {
        let result = extract_links("<html><body><p>nothing</p></body></html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_document_joins_paragraphs() {
        let html = r#"
            <html><body>
            <div class="read__content">
                <p>Pertandingan berjalan ketat.</p>
                <p>Gol datang di babak kedua.</p>
            </div>
            </body></html>
        "#;
        let document = extract_document(html).unwrap();
        assert_eq!(
            document.as_deref(),
            Some("Pertandingan berjalan ketat. Gol datang di babak kedua.")
        );
    }

    #[test]
    fn test_extract_document_without_content_is_skipped() {
        let document = extract_document("<html><body><p>bare</p></body></html>").unwrap();
        assert_eq!(document, None);
    }
}

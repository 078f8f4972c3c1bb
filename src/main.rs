//! # newsrank
//!
//! A small news search pipeline that scrapes articles from a news site,
//! normalizes the text, and ranks the articles against a query string with
//! TF-IDF cosine similarity.
//!
//! ## Features
//!
//! - Scrapes articles from France 24 or Kompas Bola
//! - Normalizes article text through a fixed cleaning chain
//! - Caches the normalized documents as a JSON array for offline reruns
//! - Ranks documents against the query and prints the best matches
//!
//! ## Usage
//!
//! ```sh
//! # Fresh scrape of France 24, ranked against the default query
//! newsrank
//!
//! # Rerun against the cache with a custom query
//! newsrank cached --query "world cup" --top 3
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Indexing**: Discover article URLs from the site's listing page
//! 2. **Fetching**: Download article content from discovered URLs, one at a time
//! 3. **Normalizing**: Clean the article text and write the cache file
//! 4. **Ranking**: Fit a TF-IDF model over the documents and score the query

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cache;
mod cli;
mod normalize;
mod scrapers;
mod tfidf;
mod utils;

use cli::{Cli, Mode, Site};
use tfidf::TfIdf;

/// One ranked result as emitted by `--json`.
#[derive(Serialize)]
struct JsonHit<'a> {
    index: usize,
    score: f32,
    text: &'a str,
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        // Results go to stdout; keep diagnostics off that channel.
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("newsrank starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let query = args
        .query
        .clone()
        .unwrap_or_else(|| args.site.default_query().to_string());
    let cache_file = args
        .cache_file
        .clone()
        .unwrap_or_else(|| args.site.default_cache_file().to_string());

    // ---- Collect the document set ----
    let documents = match args.mode {
        Mode::Cached => cache::read_documents(&cache_file).await?,
        Mode::Fresh => {
            let client = scrapers::build_client(args.timeout_secs)?;

            let urls = match args.site {
                Site::France24 => scrapers::france24::index_articles(&client).await?,
                Site::Kompas => scrapers::kompas::index_articles(&client).await?,
            };
            info!(count = urls.len(), site = %args.site, "Collected article links");

            let raw_documents = match args.site {
                Site::France24 => scrapers::france24::fetch_articles(&client, urls).await?,
                Site::Kompas => scrapers::kompas::fetch_articles(&client, urls).await?,
            };

            let documents = normalize::clean_documents(&raw_documents);
            cache::write_documents(&cache_file, &documents).await?;
            documents
        }
    };
    info!(count = documents.len(), "Documents ready for ranking");

    // ---- Fit the model and rank the query ----
    let model = TfIdf::fit(&documents);
    debug!(
        terms = model.terms(),
        documents = model.documents(),
        "Vector space ready"
    );
    let hits = model.rank(&query);

    // ---- Print the best matches ----
    if args.json {
        let best: Vec<JsonHit> = hits
            .iter()
            .take(args.top)
            .filter(|hit| hit.score > 0.0)
            .map(|hit| JsonHit {
                index: hit.doc,
                score: hit.score,
                text: &documents[hit.doc],
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&best)?);
    } else {
        println!("query: {}", query);
        for hit in hits.iter().take(args.top).filter(|hit| hit.score > 0.0) {
            println!("Similarity Value: {}", hit.score);
            println!("---- Article -----");
            println!("{}", documents[hit.doc]);
            println!("------------------");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

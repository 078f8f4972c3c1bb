//! Document cache: one JSON array of normalized document strings.
//!
//! A fresh scrape writes the normalized documents to a single cache file;
//! a cached run reads them back and skips the network stages entirely.
//! The file holds nothing but the ordered array, so a write followed by a
//! read reproduces the exact document sequence the ranker was fitted on.

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write the normalized documents to `path` as a JSON array.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_documents(path: &str, docs: &[String]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(docs)?;
    fs::write(path, json).await?;
    info!(count = docs.len(), "Wrote document cache");
    Ok(())
}

/// Read a previously written document cache back, in order.
///
/// Fails if the file is missing or does not hold a JSON array of strings.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn read_documents(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let json = fs::read_to_string(path).await?;
    let docs: Vec<String> = serde_json::from_str(&json)?;
    info!(count = docs.len(), "Loaded document cache");
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("newsrank_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let path = scratch_path("round_trip");
        let docs = vec![
            "cats are great".to_string(),
            "dogs are great".to_string(),
            "cats and dogs".to_string(),
        ];

        write_documents(&path, &docs).await.unwrap();
        let restored = read_documents(&path).await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(restored, docs);
    }

    #[tokio::test]
    async fn test_round_trip_empty_set() {
        let path = scratch_path("empty");
        write_documents(&path, &[]).await.unwrap();
        let restored = read_documents(&path).await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(restored.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let path = scratch_path("definitely_missing");
        let _ = std::fs::remove_file(&path);
        assert!(read_documents(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_cache_is_an_error() {
        let path = scratch_path("malformed");
        tokio::fs::write(&path, "{\"not\": \"an array\"}").await.unwrap();
        let result = read_documents(&path).await;
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
    }
}

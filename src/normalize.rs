//! Text normalization for scraped article content.
//!
//! Scraped article text arrives with accented characters, social-media
//! handles, punctuation, and digits that only add noise to term matching.
//! [`clean_document`] reduces a document to lowercase ASCII words separated
//! by single spaces so that the TF-IDF vocabulary stays small and stable.
//!
//! # Substitution Chain
//!
//! The substitutions run in a fixed order; later steps assume the earlier
//! ones already ran (punctuation becomes spaces *before* whitespace runs
//! are collapsed):
//!
//! 1. Runs of non-ASCII characters become a single space
//! 2. `@mentions` are removed
//! 3. The document is lowercased
//! 4. ASCII punctuation becomes a single space
//! 5. ASCII digits are removed
//! 6. Whitespace runs collapse to a single space; ends are trimmed
//!
//! The chain is idempotent: cleaning an already-clean document is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Normalize one document down to lowercase ASCII words.
///
/// Pure and deterministic: the same input always yields the same output,
/// and the output is a fixed point of the function.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_document("Hello, World! 123"), "hello world");
/// assert_eq!(clean_document("ping @editor re: café"), "ping re caf");
/// ```
pub fn clean_document(text: &str) -> String {
    let text = NON_ASCII.replace_all(text, " ");
    let text = MENTION.replace_all(&text, "");
    let text = text.to_lowercase();
    let text = PUNCTUATION.replace_all(&text, " ");
    let text = DIGIT.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Normalize a batch of documents, preserving their order.
pub fn clean_documents(docs: &[String]) -> Vec<String> {
    docs.iter().map(|doc| clean_document(doc)).collect()
}

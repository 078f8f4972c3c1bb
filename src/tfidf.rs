//! TF-IDF vector space construction and cosine-similarity ranking.
//!
//! [`TfIdf::fit`] builds the vector space once, from the full document set;
//! the fitted model is immutable afterwards. [`TfIdf::rank`] projects a
//! query into that space and scores every document against it. There is no
//! incremental update: adding a document means rebuilding the model.
//!
//! # Weighting
//!
//! A document's weight for a term is its raw term count multiplied by the
//! smoothed inverse document frequency `ln((1 + n) / (1 + df)) + 1`. The
//! smoothing keeps every observed term at a strictly positive weight, even
//! terms present in all documents. Scores are cosine similarities, so the
//! raw-count scale of each vector cancels out.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, instrument};

use crate::normalize::clean_document;

/// A fitted TF-IDF model: vocabulary mapping, per-term IDF weights, and the
/// documents × vocabulary weight matrix. All three are built together by
/// [`TfIdf::fit`] and never mutated, so the column ordering used for the
/// document vectors is by construction the same one used for query vectors.
#[derive(Debug)]
pub struct TfIdf {
    /// Term to column index, assigned in first-seen order during fit.
    vocabulary: HashMap<String, usize>,
    /// Smoothed IDF weight per column.
    idf: Vec<f32>,
    /// One weight vector per document, in document order.
    matrix: Vec<Vec<f32>>,
}

/// One ranked document: its position in the fitted document sequence and
/// its cosine similarity against the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub doc: usize,
    pub score: f32,
}

impl TfIdf {
    /// Build the vector space over a set of normalized documents.
    ///
    /// Documents are expected to already be normalized (see
    /// [`crate::normalize::clean_document`]); `fit` only tokenizes and
    /// counts. The document order defines the `doc` indices reported by
    /// [`rank`](Self::rank).
    #[instrument(level = "info", skip_all, fields(documents = docs.len()))]
    pub fn fit(docs: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        let mut term_counts: Vec<HashMap<usize, f32>> = Vec::with_capacity(docs.len());

        for doc in docs {
            let mut counts: HashMap<usize, f32> = HashMap::new();
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokenize(doc) {
                let next_column = vocabulary.len();
                let column = *vocabulary.entry(token.to_string()).or_insert(next_column);
                if column == doc_freq.len() {
                    doc_freq.push(0);
                }
                *counts.entry(column).or_insert(0.0) += 1.0;
                if seen.insert(column) {
                    doc_freq[column] += 1;
                }
            }
            term_counts.push(counts);
        }

        let n = docs.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let dims = vocabulary.len();
        let matrix: Vec<Vec<f32>> = term_counts
            .into_iter()
            .map(|counts| {
                let mut row = vec![0.0f32; dims];
                for (column, count) in counts {
                    row[column] = count * idf[column];
                }
                row
            })
            .collect();

        info!(documents = docs.len(), terms = dims, "Fitted TF-IDF vector space");
        Self { vocabulary, idf, matrix }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the model was fitted over.
    pub fn documents(&self) -> usize {
        self.matrix.len()
    }

    /// Rank every fitted document against a raw query string.
    ///
    /// The query goes through the same normalization and tokenization as
    /// the documents did; terms outside the fitted vocabulary contribute
    /// nothing. Returns one [`Hit`] per document, sorted by descending
    /// score; equal scores keep ascending document order. A zero-norm
    /// query or document vector scores `0.0` rather than dividing by zero.
    #[instrument(level = "info", skip_all)]
    pub fn rank(&self, query: &str) -> Vec<Hit> {
        let cleaned = clean_document(query);
        debug!(query = %cleaned, "Projecting query into fitted space");
        let query_vector = self.project(&cleaned);

        let mut hits: Vec<Hit> = self
            .matrix
            .iter()
            .enumerate()
            .map(|(doc, row)| Hit {
                doc,
                score: cosine_similarity(&query_vector, row),
            })
            .collect();

        // Stable sort: ties stay in ascending document order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits
    }

    /// Project normalized text into the fitted space. Unknown terms are
    /// dropped; a query with no known terms yields the zero vector.
    fn project(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for (column, count) in counts {
            vector[column] = count * self.idf[column];
        }
        vector
    }
}

/// Split normalized text into terms. Single-character fragments carry no
/// signal and are dropped, matching the vectorizer behavior the document
/// weights were designed around.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|token| token.len() > 1)
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

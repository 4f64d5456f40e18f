//! Sparse lexical index: corpus TF-IDF with smoothed IDF.
//!
//! Fitting is construction — a `TfidfIndex` value always represents a
//! fully built vocabulary, so "transform before fit" is unrepresentable.
//! The vocabulary is frozen at fit time; query terms unseen then
//! contribute zero weight.

use std::collections::{HashMap, HashSet};

use campus_core::constants::MIN_TOKEN_LEN;
use campus_core::errors::{CampusResult, RetrievalError};
use campus_core::models::Document;

/// A sparse vector: (term id, weight) pairs sorted by term id.
pub type SparseVector = Vec<(usize, f32)>;

/// TF-IDF weighted sparse index over a fixed corpus.
#[derive(Debug)]
pub struct TfidfIndex {
    vocab: HashMap<String, usize>,
    idf: Vec<f32>,
    /// One L2-normalized row per document, index-aligned with the corpus.
    rows: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Build vocabulary, document frequencies, and weighted rows from the
    /// full corpus. Called exactly once per corpus load.
    pub fn fit(documents: &[Document]) -> CampusResult<Self> {
        if documents.is_empty() {
            return Err(RetrievalError::EmptyCorpus.into());
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(&d.text)).collect();

        // Assign term ids in first-seen order.
        let mut vocab: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            for term in tokens {
                let next_id = vocab.len();
                vocab.entry(term.clone()).or_insert(next_id);
            }
        }

        // Document frequency per term id.
        let mut df = vec![0usize; vocab.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                df[vocab[term]] += 1;
            }
        }

        // Smoothed IDF: ln((1 + N) / (1 + df)) + 1. Never zero, so terms
        // appearing in every document still contribute.
        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| weighted_row(tokens, &vocab, &idf))
            .collect();

        Ok(Self { vocab, idf, rows })
    }

    /// Project a query onto the fit vocabulary. Unseen terms are ignored.
    pub fn transform(&self, query: &str) -> SparseVector {
        weighted_row(&tokenize(query), &self.vocab, &self.idf)
    }

    /// Dot product of a query vector against every corpus row,
    /// index-aligned with the document sequence.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f32> {
        self.rows.iter().map(|row| dot(query, row)).collect()
    }

    /// Number of indexed documents (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct terms observed at fit time.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// TF * IDF for one token sequence, L2-normalized, sorted by term id.
fn weighted_row(tokens: &[String], vocab: &HashMap<String, usize>, idf: &[f32]) -> SparseVector {
    let mut tf: HashMap<usize, f32> = HashMap::new();
    for term in tokens {
        if let Some(&id) = vocab.get(term) {
            *tf.entry(id).or_default() += 1.0;
        }
    }

    let mut row: SparseVector = tf
        .into_iter()
        .map(|(id, count)| (id, count * idf[id]))
        .collect();
    row.sort_by_key(|&(id, _)| id);

    let norm: f32 = row.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for (_, w) in &mut row {
            *w /= norm;
        }
    }
    row
}

/// Dot product of two id-sorted sparse vectors.
fn dot(a: &SparseVector, b: &SparseVector) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Lowercase alphanumeric terms of at least `MIN_TOKEN_LEN` characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() >= MIN_TOKEN_LEN)
        .map(|s| s.to_lowercase())
        .collect()
}

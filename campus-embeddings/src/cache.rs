//! In-memory embedding cache keyed by content hash.

use moka::sync::Cache;

/// Caches embeddings by blake3 hash of the exact input text.
///
/// Corpus vectors are embedded once at build time and owned by the vector
/// index, so only query embeddings flow through here.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
        }
    }

    fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn put(&self, text: &str, embedding: &[f32]) {
        self.cache.insert(Self::key(text), embedding.to_vec());
    }
}

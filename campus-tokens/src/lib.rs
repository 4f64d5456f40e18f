//! # campus-tokens
//!
//! Token counting against the cl100k_base vocabulary, with a content-hash
//! cache so repeated counts of the same document are free. The context
//! assembler consumes this through the `ITokenCounter` trait.

use campus_core::traits::ITokenCounter;
use moka::sync::Cache;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// Default number of cached counts.
const DEFAULT_CACHE_SIZE: u64 = 10_000;

/// BPE token counter with a blake3-keyed cache.
pub struct TokenCounter {
    bpe: CoreBPE,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a counter with the given cache capacity.
    pub fn with_cache_size(cache_size: u64) -> Self {
        // The vocabulary is embedded in the binary; parsing it cannot fail
        // at runtime.
        let bpe = cl100k_base().expect("embedded cl100k_base vocabulary");
        Self {
            bpe,
            cache: Cache::new(cache_size),
        }
    }

    /// Count tokens without touching the cache.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    /// Count tokens, memoized by content hash.
    pub fn count_cached(&self, text: &str) -> usize {
        let key = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(key, || self.count(text))
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::with_cache_size(DEFAULT_CACHE_SIZE)
    }
}

impl ITokenCounter for TokenCounter {
    fn count(&self, text: &str) -> usize {
        self.count_cached(text)
    }
}

//! Hashed term-frequency embedding provider.
//!
//! Produces deterministic fixed-dimension vectors by hashing terms into
//! buckets and weighting by term frequency. Not as semantically rich as a
//! neural encoder, but always available and version-stable, which keeps
//! `encode(t) == encode(t)` testable.

use std::collections::HashMap;

use campus_core::constants::MIN_TOKEN_LEN;
use campus_core::errors::CampusResult;
use campus_core::traits::IEmbeddingProvider;

/// Deterministic hashed term-frequency provider.
pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Lowercase alphanumeric terms, dropping noise words.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= MIN_TOKEN_LEN)
            .map(|s| s.to_lowercase())
            .filter(|s| !is_stop_word(s))
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            let freq = count / total;
            // Inverse-frequency proxy: longer terms are rarer and carry
            // more signal than short common ones.
            let weight = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += freq * weight;
        }

        l2_normalize(&mut vec);
        vec
    }
}

fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec {
            *v /= norm;
        }
    }
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the" | "and" | "for" | "are" | "but" | "not" | "you" | "all" | "can" | "had" | "was"
            | "one" | "our" | "out" | "has" | "have" | "been" | "from" | "this" | "that" | "with"
            | "they" | "will" | "which" | "their" | "what" | "its" | "into" | "more" | "other"
    )
}

impl IEmbeddingProvider for HashedTfProvider {
    fn embed(&self, text: &str) -> CampusResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

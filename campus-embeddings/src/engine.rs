//! EmbeddingEngine — the entry point for campus-embeddings.
//!
//! Wraps the provider fallback chain and the query-embedding cache behind
//! one object. Expensive to construct, so it is built once at startup and
//! shared by reference with the retrieval engine.

use campus_core::config::EmbeddingConfig;
use campus_core::errors::{CampusResult, EmbeddingError};
use campus_core::models::{DegradationEvent, Document};
use campus_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::chain::FallbackChain;
use crate::providers;

/// Dense encoder facade: fallback chain + query cache.
pub struct EmbeddingEngine {
    chain: FallbackChain,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create an engine from configuration.
    ///
    /// The preferred provider is placed first and the hashed provider is
    /// always appended as last resort. Fails when nothing in the chain is
    /// available — an unusable encoder is fatal at startup, not a per-query
    /// condition.
    pub fn new(config: &EmbeddingConfig) -> CampusResult<Self> {
        let mut chain = FallbackChain::new();
        chain.push(providers::create_provider(config));
        // A second hashed provider is harmless when create_provider already
        // degraded to one; the first available entry wins.
        chain.push(Box::new(providers::HashedTfProvider::new(
            config.dimensions,
        )));

        if !chain.has_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: "no embedding provider available".to_string(),
            }
            .into());
        }

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "embedding engine initialized"
        );

        Ok(Self {
            chain,
            cache: EmbeddingCache::new(config.cache_size),
            dimensions: config.dimensions,
        })
    }

    /// Encode the whole corpus, order-preserving.
    ///
    /// One batch call, no caching: the corpus is encoded exactly once per
    /// index build.
    pub fn encode_corpus(&self, documents: &[Document]) -> CampusResult<Vec<Vec<f32>>> {
        let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
        let vectors = self.chain.embed_batch(&texts)?;
        self.check_dimensions(&vectors)?;
        debug!(documents = vectors.len(), "corpus encoded");
        Ok(vectors)
    }

    /// Embed a query, memoized by content hash.
    pub fn embed_query(&self, query: &str) -> CampusResult<Vec<f32>> {
        if let Some(cached) = self.cache.get(query) {
            debug!("query embedding cache hit");
            return Ok(cached);
        }
        let embedding = self.chain.embed(query)?;
        self.check_dimensions(std::slice::from_ref(&embedding))?;
        self.cache.put(query, &embedding);
        Ok(embedding)
    }

    /// Every vector leaving this engine must match the configured width;
    /// the index alignment invariant relies on uniform rows. Runs on both
    /// the inherent encoding paths and the `IEmbeddingProvider` impl.
    fn check_dimensions(&self, vectors: &[Vec<f32>]) -> CampusResult<()> {
        for vector in vectors {
            if vector.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: vector.len(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Drain accumulated degradation events.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    /// Name of the provider currently serving requests.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> CampusResult<Vec<f32>> {
        self.embed_query(text)
    }

    fn embed_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>> {
        let vectors = self.chain.embed_batch(texts)?;
        self.check_dimensions(&vectors)?;
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "campus-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.chain.has_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(&EmbeddingConfig {
            dimensions: 128,
            ..Default::default()
        })
        .unwrap()
    }

    fn doc(text: &str) -> Document {
        Document::new("id", "name", text)
    }

    #[test]
    fn engine_builds_from_default_config() {
        let engine = default_engine();
        assert_eq!(engine.dimensions(), 128);
        assert_eq!(engine.active_provider(), "hashed-tf");
    }

    #[test]
    fn corpus_encoding_is_index_aligned() {
        let engine = default_engine();
        let docs = vec![doc("dental college"), doc("engineering college")];
        let vectors = engine.encode_corpus(&docs).unwrap();
        assert_eq!(vectors.len(), docs.len());
        assert!(vectors.iter().all(|v| v.len() == 128));
    }

    #[test]
    fn empty_corpus_encodes_to_empty_matrix() {
        let engine = default_engine();
        assert!(engine.encode_corpus(&[]).unwrap().is_empty());
    }

    #[test]
    fn query_embedding_is_cached_and_stable() {
        let engine = default_engine();
        let a = engine.embed_query("admission to dental courses").unwrap();
        let b = engine.embed_query("admission to dental courses").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ragged_vectors_fail_the_dimension_check() {
        let engine = default_engine();
        assert!(engine.check_dimensions(&[vec![0.0; 128]]).is_ok());
        let err = engine
            .check_dimensions(&[vec![0.0; 128], vec![0.0; 64]])
            .unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn trait_batch_encoding_is_validated_like_encode_corpus() {
        let engine = default_engine();
        let docs = vec![doc("dental college"), doc("library hours")];
        let texts: Vec<String> = docs.iter().map(|d| d.text.clone()).collect();
        let via_trait = IEmbeddingProvider::embed_batch(&engine, &texts).unwrap();
        assert_eq!(via_trait, engine.encode_corpus(&docs).unwrap());
    }

    #[test]
    fn onnx_without_model_path_degrades_to_hashed() {
        let engine = EmbeddingEngine::new(&EmbeddingConfig {
            provider: "onnx".to_string(),
            dimensions: 64,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.active_provider(), "hashed-tf");
    }

    #[test]
    fn trait_impl_matches_engine_methods() {
        let engine = default_engine();
        let provider: &dyn IEmbeddingProvider = &engine;
        assert!(provider.is_available());
        assert_eq!(provider.dimensions(), 128);
        let via_trait = provider.embed("library opening hours").unwrap();
        assert_eq!(via_trait, engine.embed_query("library opening hours").unwrap());
    }
}

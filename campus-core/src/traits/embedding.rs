use crate::errors::CampusResult;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> CampusResult<Vec<f32>>;

    /// Embed a batch of texts, order-preserving.
    ///
    /// Must be at least as efficient as embedding each text individually;
    /// providers batch internally where their backend allows it.
    fn embed_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Dense encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Preferred provider: "onnx" (needs `model_path`) or "hashed".
    pub provider: String,
    /// Path to an ONNX model file; ignored by the hashed provider.
    pub model_path: Option<String>,
    /// Dimensionality of produced vectors.
    pub dimensions: usize,
    /// Entries held by the query-embedding cache.
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "hashed".to_string(),
            model_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}

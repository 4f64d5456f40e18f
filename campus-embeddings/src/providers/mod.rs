//! Embedding provider implementations.

mod hashed;
mod onnx_provider;

pub use hashed::HashedTfProvider;
pub use onnx_provider::OnnxProvider;

use campus_core::config::EmbeddingConfig;
use campus_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Build the preferred provider from configuration.
///
/// Falls back to the hashed provider when the ONNX model cannot be loaded;
/// the failure is logged so the operator sees the degraded start.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    if config.provider == "onnx" {
        match &config.model_path {
            Some(path) => match OnnxProvider::load(path, config.dimensions) {
                Ok(provider) => return Box::new(provider),
                Err(e) => warn!(error = %e, "ONNX provider unavailable, using hashed provider"),
            },
            None => warn!("onnx provider selected without model_path, using hashed provider"),
        }
    }
    Box::new(HashedTfProvider::new(config.dimensions))
}

//! Provider fallback chain.
//!
//! Tries providers in priority order; every fallback is recorded as a
//! degradation event so operators can see when the preferred encoder
//! stopped serving.

use std::sync::Mutex;

use campus_core::errors::{CampusResult, EmbeddingError};
use campus_core::models::DegradationEvent;
use campus_core::traits::IEmbeddingProvider;
use chrono::Utc;
use tracing::warn;

/// Ordered chain of embedding providers with degradation tracking.
///
/// Event recording sits behind a mutex so the chain can embed through the
/// `&self` trait signature.
pub struct FallbackChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed a single text through the first provider that succeeds.
    pub fn embed(&self, text: &str) -> CampusResult<Vec<f32>> {
        self.try_chain(|p| p.embed(text))
    }

    /// Embed a batch, order-preserving, through the first provider that
    /// succeeds for the whole batch.
    pub fn embed_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>> {
        self.try_chain(|p| p.embed_batch(texts))
    }

    fn try_chain<T>(
        &self,
        op: impl Fn(&dyn IEmbeddingProvider) -> CampusResult<T>,
    ) -> CampusResult<T> {
        let mut last_error = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match op(provider.as_ref()) {
                Ok(result) => {
                    if i > 0 {
                        self.record_fallback(provider.name());
                    }
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("all {} providers exhausted", self.providers.len()),
            }
            .into()
        }))
    }

    fn record_fallback(&self, fallback_name: &str) {
        let primary = self
            .providers
            .first()
            .map(|p| p.name())
            .unwrap_or("unknown");
        let event = DegradationEvent {
            component: "embeddings".to_string(),
            failure: format!("{primary} unavailable"),
            fallback_used: fallback_name.to_string(),
            timestamp: Utc::now(),
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Whether any provider in the chain is currently available.
    pub fn has_available(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

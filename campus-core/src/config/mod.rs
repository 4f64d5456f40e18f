//! Configuration for every subsystem.
//!
//! All structs are `#[serde(default)]` so a partial TOML file overrides
//! only what it names. The index itself is never configured from disk; it
//! is rebuilt from the corpus on every start.

mod chat_config;
mod embedding_config;
mod expansion_config;
mod retrieval_config;

pub use chat_config::ChatConfig;
pub use embedding_config::EmbeddingConfig;
pub use expansion_config::{ExpansionConfig, SynonymRule};
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CampusError, CampusResult};

/// Default values shared by the config structs.
pub(crate) mod defaults {
    /// Candidates requested from each retrieval channel per query.
    pub const DEFAULT_TOP_K: usize = 5;
    /// Token budget for the assembled context block.
    pub const DEFAULT_CONTEXT_BUDGET: usize = 50_000;
    /// Token budget for the generated reply.
    pub const DEFAULT_REPLY_BUDGET: usize = 2_048;
    /// Embedding dimensionality of the hashed fallback provider.
    pub const DEFAULT_EMBEDDING_DIMS: usize = 384;
    /// Entries held by the query-embedding cache.
    pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
}

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub expansion: ExpansionConfig,
    pub chat: ChatConfig,
}

impl CampusConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(text: &str) -> CampusResult<Self> {
        toml::from_str(text).map_err(|e| CampusError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file on disk.
    pub fn from_file(path: &std::path::Path) -> CampusResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CampusError::ConfigError {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&text)
    }
}

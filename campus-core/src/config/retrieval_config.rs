use serde::{Deserialize, Serialize};

use super::defaults;

/// Hybrid retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates requested from each channel, and the final hit count cap.
    pub top_k: usize,
    /// Token budget for the assembled context block.
    pub context_budget: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            context_budget: defaults::DEFAULT_CONTEXT_BUDGET,
        }
    }
}

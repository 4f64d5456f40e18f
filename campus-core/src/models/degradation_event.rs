use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a provider falling back to a lower-fidelity alternative.
///
/// Emitted by the embedding fallback chain so operators can see when the
/// primary encoder stopped serving queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Subsystem that degraded, e.g. "embeddings".
    pub component: String,
    /// What went wrong with the preferred provider.
    pub failure: String,
    /// Name of the provider that served the request instead.
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

use crate::errors::CampusResult;
use crate::models::ChatMessage;

/// Hosted text-generation service.
///
/// Invoked exactly once per user turn with the assembled context embedded
/// in the templated prompt. `tools` is the provider-specific tool schema
/// forwarded verbatim with every call; empty when the deployment defines
/// none.
pub trait IGenerator: Send + Sync {
    fn generate(
        &self,
        system: &str,
        messages: &[ChatMessage],
        max_tokens: usize,
        tools: &[serde_json::Value],
    ) -> CampusResult<String>;
}

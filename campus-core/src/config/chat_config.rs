use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversation loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Token budget for the generated reply.
    pub reply_budget: usize,
    /// Reply when retrieval finds nothing relevant.
    pub no_context_reply: String,
    /// Reply when a per-turn failure is absorbed at the loop boundary.
    pub error_reply: String,
    /// Tool schema handed to the generation service with every call,
    /// opaque to the core.
    pub tools: Vec<serde_json::Value>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_budget: defaults::DEFAULT_REPLY_BUDGET,
            no_context_reply: "I'm sorry, but I couldn't find any relevant information in my \
                               knowledge base to answer your question. Could you please rephrase \
                               or ask about a different topic covered by our documents?"
                .to_string(),
            error_reply: "I apologize, but I encountered an error while processing your request. \
                          Could you please try asking your question in a different way?"
                .to_string(),
            tools: Vec::new(),
        }
    }
}

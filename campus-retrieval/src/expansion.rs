//! Synonym query expansion.
//!
//! Widens recall before retrieval by appending domain synonyms for any
//! trigger term present in the query. The synonym table is configuration
//! data, so deployments can ship their own vocabulary.

use campus_core::config::{ExpansionConfig, SynonymRule};

/// Applies an ordered synonym rule list to queries.
pub struct SynonymExpander {
    rules: Vec<SynonymRule>,
}

impl SynonymExpander {
    pub fn new(config: &ExpansionConfig) -> Self {
        Self {
            rules: config.rules.clone(),
        }
    }

    /// Expand a query. Pure: the input is never mutated.
    ///
    /// Each trigger found as a case-insensitive substring of the query
    /// appends all its synonyms, space-separated; multiple triggers may
    /// fire, and their groups are appended in declared rule order. The
    /// original query text is always the prefix of the result.
    pub fn expand(&self, query: &str) -> String {
        let haystack = query.to_lowercase();
        let mut expanded = query.to_string();
        for rule in &self.rules {
            if haystack.contains(&rule.trigger.to_lowercase()) {
                for synonym in &rule.synonyms {
                    expanded.push(' ');
                    expanded.push_str(synonym);
                }
            }
        }
        expanded
    }
}

use serde::{Deserialize, Serialize};

/// One trigger term and the synonyms appended when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRule {
    /// Case-insensitive substring that activates the rule.
    pub trigger: String,
    /// Terms appended to the query, in this order.
    pub synonyms: Vec<String>,
}

impl SynonymRule {
    pub fn new(trigger: &str, synonyms: &[&str]) -> Self {
        Self {
            trigger: trigger.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Query expansion configuration.
///
/// The synonym table is data, not logic: rules fire in declared order, so
/// a custom vocabulary can be swapped in from configuration without code
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    pub enabled: bool,
    pub rules: Vec<SynonymRule>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: vec![
                SynonymRule::new("admission", &["enrollment", "registration", "apply"]),
                SynonymRule::new("course", &["program", "curriculum", "study"]),
                SynonymRule::new("facility", &["infrastructure", "amenity", "resource"]),
            ],
        }
    }
}

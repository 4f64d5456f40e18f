use serde::{Deserialize, Serialize};

/// A directory entry from the document store, before its content is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Store-assigned identifier, opaque to the engine.
    pub id: String,
    /// Human-readable file name, used only for logging.
    pub name: String,
}

/// A fully loaded, normalized corpus document.
///
/// Identity within the engine is the document's position in the
/// corpus-ordered `Vec<Document>`, not its store id. Documents are
/// immutable after load and live for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    /// Normalized text: lower-cased, newlines collapsed to spaces.
    pub text: String,
}

impl Document {
    /// Build a document from already-normalized text.
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
        }
    }
}

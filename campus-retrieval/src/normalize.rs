//! Deterministic text normalization applied to documents and queries.

/// Lower-case and collapse newlines to single spaces.
///
/// Pure and total: the empty string maps to the empty string. Applied to
/// every document before indexing and to every query before retrieval, so
/// both sides of the match see the same casing.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

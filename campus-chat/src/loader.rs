//! Corpus loading from the document store.

use campus_core::errors::CampusResult;
use campus_core::models::Document;
use campus_core::traits::IDocumentSource;
use campus_retrieval::normalize;
use tracing::info;

/// List, fetch, decode, and normalize every document in the store.
///
/// Failures here are startup failures and propagate to the operator;
/// there is no partial corpus.
pub fn load_corpus(source: &dyn IDocumentSource) -> CampusResult<Vec<Document>> {
    let metas = source.list_documents()?;
    let mut documents = Vec::with_capacity(metas.len());

    for meta in metas {
        let bytes = source.fetch_content(&meta.id)?;
        let text = normalize(&decode_text(&bytes));
        info!(name = %meta.name, bytes = bytes.len(), "loaded and normalized document");
        documents.push(Document::new(meta.id, meta.name, text));
    }

    Ok(documents)
}

/// Decode raw document bytes: UTF-8 first, Latin-1 as the lossless
/// single-byte fallback.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

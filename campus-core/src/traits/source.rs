use crate::errors::CampusResult;
use crate::models::DocumentMeta;

/// Remote document store.
///
/// Listing and fetching are external I/O; the core only sees the decoded,
/// normalized results. Timeouts are the caller's responsibility.
pub trait IDocumentSource: Send + Sync {
    /// List every document in the corpus folder.
    fn list_documents(&self) -> CampusResult<Vec<DocumentMeta>>;

    /// Fetch the raw bytes of one document.
    fn fetch_content(&self, id: &str) -> CampusResult<Vec<u8>>;
}

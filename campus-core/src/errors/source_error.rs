/// Errors from external collaborators: document store and generation service.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("listing documents failed: {reason}")]
    ListFailed { reason: String },

    #[error("fetching document {id} failed: {reason}")]
    FetchFailed { id: String, reason: String },

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },
}

/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    #[error("sparse index not built: fit the corpus before calling transform")]
    IndexNotBuilt,

    #[error(
        "index alignment broken: {documents} documents, {embeddings} embeddings, {sparse_rows} sparse rows"
    )]
    AlignmentBroken {
        documents: usize,
        embeddings: usize,
        sparse_rows: usize,
    },
}

//! RetrievalEngine: hybrid dense + sparse retrieval over a fixed corpus.
//!
//! Build: encode the corpus, build the flat vector index, fit the TF-IDF
//! index, verify all three stay index-aligned with the document sequence.
//! Query: dense top-k and sparse top-k, union, rerank by combined score.

use campus_core::config::RetrievalConfig;
use campus_core::errors::{CampusResult, RetrievalError};
use campus_core::models::Document;
use campus_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::index::VectorIndex;
use crate::normalize::normalize;
use crate::sparse::TfidfIndex;

/// One retrieved document with its ranking scores.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHit {
    /// Position in the corpus-ordered document sequence.
    pub doc: usize,
    /// Combined score the final ranking is sorted by.
    pub score: f64,
    /// Max-normalized dense similarity contribution (0 when the document
    /// came only from the sparse channel).
    pub dense_score: f64,
    /// Max-normalized sparse similarity contribution (0 when the document
    /// came only from the dense channel).
    pub sparse_score: f64,
}

/// Both per-corpus indexes; absent when the corpus was empty at build time.
struct Indexes {
    vector: VectorIndex,
    sparse: TfidfIndex,
}

/// The hybrid retrieval engine.
///
/// Owns the embedding matrix (inside the vector index) and the sparse
/// matrix; borrows the documents read-only. Rebuilding the corpus means
/// building a new engine, which makes rebuild exclusive with querying by
/// construction.
pub struct RetrievalEngine<'a> {
    documents: &'a [Document],
    embedder: &'a dyn IEmbeddingProvider,
    indexes: Option<Indexes>,
    config: RetrievalConfig,
}

impl std::fmt::Debug for RetrievalEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalEngine")
            .field("documents", &self.documents.len())
            .finish_non_exhaustive()
    }
}

impl<'a> RetrievalEngine<'a> {
    /// Build all index state from the current document set.
    ///
    /// An empty corpus produces a degraded engine whose queries return no
    /// hits; anything else that breaks the alignment invariant
    /// (`documents == embeddings == sparse rows`) is an error.
    pub fn build(
        documents: &'a [Document],
        embedder: &'a dyn IEmbeddingProvider,
        config: RetrievalConfig,
    ) -> CampusResult<Self> {
        if documents.is_empty() {
            debug!("empty corpus, retrieval will return no hits");
            return Ok(Self {
                documents,
                embedder,
                indexes: None,
                config,
            });
        }

        let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts)?;
        let sparse = TfidfIndex::fit(documents)?;

        if embeddings.len() != documents.len() || sparse.len() != documents.len() {
            return Err(RetrievalError::AlignmentBroken {
                documents: documents.len(),
                embeddings: embeddings.len(),
                sparse_rows: sparse.len(),
            }
            .into());
        }

        let vector = VectorIndex::build(embeddings)?;

        info!(
            documents = documents.len(),
            dims = vector.dimensions(),
            vocab = sparse.vocab_size(),
            "retrieval engine built"
        );

        Ok(Self {
            documents,
            embedder,
            indexes: Some(Indexes { vector, sparse }),
            config,
        })
    }

    /// The borrowed corpus, in index order.
    pub fn documents(&self) -> &[Document] {
        self.documents
    }

    /// Retrieve with the configured `top_k`.
    pub fn retrieve(&self, query: &str) -> CampusResult<Vec<RankedHit>> {
        self.retrieve_top(query, self.config.top_k)
    }

    /// Retrieve the top `k` documents for a query.
    ///
    /// Returns at most `min(k, |dense ∪ sparse|)` hits, reranked by
    /// combined score: each channel's scores are max-normalized and
    /// summed, ties broken by lower document index. A query that is empty
    /// after normalization returns no hits rather than failing.
    pub fn retrieve_top(&self, query: &str, k: usize) -> CampusResult<Vec<RankedHit>> {
        let query = normalize(query);
        if query.trim().is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        let Some(indexes) = &self.indexes else {
            return Ok(Vec::new());
        };

        // Dense channel: top-k by ascending squared L2.
        let query_embedding = self.embedder.embed(&query)?;
        let dense = indexes.vector.search(&query_embedding, k);

        // Sparse channel: top-k by descending TF-IDF similarity. The sort
        // is stable over index-ordered input, so equal scores keep the
        // lower document index first.
        let query_sparse = indexes.sparse.transform(&query);
        let similarities = indexes.sparse.similarities(&query_sparse);
        let mut sparse: Vec<(usize, f32)> = similarities.into_iter().enumerate().collect();
        sparse.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sparse.truncate(k);

        debug!(
            dense = dense.len(),
            sparse = sparse.len(),
            "channel candidates gathered"
        );

        let hits = fuse(&dense, &sparse, k);
        info!(query_len = query.len(), hits = hits.len(), k, "retrieval complete");
        Ok(hits)
    }
}

/// Union the two channels and rerank by combined score.
///
/// Dense distances are mapped to similarities via `1 / (1 + d)`; each
/// channel is then max-normalized so neither scale dominates, and the two
/// contributions are summed. Sorting is descending by combined score with
/// ties broken by lower document index, which makes truncation to `k`
/// deterministic — the original system truncated an unordered union and
/// could keep any k members.
fn fuse(dense: &[(usize, f32)], sparse: &[(usize, f32)], k: usize) -> Vec<RankedHit> {
    let max_dense = dense
        .iter()
        .map(|&(_, d)| 1.0 / (1.0 + d as f64))
        .fold(f64::EPSILON, f64::max);
    let max_sparse = sparse
        .iter()
        .map(|&(_, s)| s as f64)
        .fold(f64::EPSILON, f64::max);

    let mut hits: Vec<RankedHit> = Vec::new();
    let mut upsert = |doc: usize, dense_score: f64, sparse_score: f64| {
        match hits.iter_mut().find(|h| h.doc == doc) {
            Some(hit) => {
                hit.dense_score += dense_score;
                hit.sparse_score += sparse_score;
            }
            None => hits.push(RankedHit {
                doc,
                score: 0.0,
                dense_score,
                sparse_score,
            }),
        }
    };

    for &(doc, distance) in dense {
        upsert(doc, (1.0 / (1.0 + distance as f64)) / max_dense, 0.0);
    }
    for &(doc, similarity) in sparse {
        upsert(doc, 0.0, similarity as f64 / max_sparse);
    }

    for hit in &mut hits {
        hit.score = hit.dense_score + hit.sparse_score;
    }
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.doc.cmp(&b.doc))
    });
    hits.truncate(k);
    hits
}

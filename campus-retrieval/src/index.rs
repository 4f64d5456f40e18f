//! Flat vector index over the corpus embedding matrix.
//!
//! Exhaustive squared-Euclidean scan. Corpus sizes here are institutional
//! document sets (hundreds, not millions), so a flat index beats anything
//! approximate on both simplicity and recall.

use campus_core::errors::{CampusResult, EmbeddingError};

/// Immutable nearest-neighbor index, index-aligned with the document
/// sequence for the life of the process.
#[derive(Debug)]
pub struct VectorIndex {
    vectors: Vec<Vec<f32>>,
    dims: usize,
}

impl VectorIndex {
    /// Build the index, validating that every row has the same
    /// dimensionality. O(N * d) memory, one-time.
    pub fn build(vectors: Vec<Vec<f32>>) -> CampusResult<Self> {
        let dims = vectors.first().map(|v| v.len()).unwrap_or(0);
        for v in &vectors {
            if v.len() != dims {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dims,
                    actual: v.len(),
                }
                .into());
            }
        }
        Ok(Self { vectors, dims })
    }

    /// The `k` nearest stored vectors by squared Euclidean distance,
    /// ascending, ties broken by lower stored index.
    ///
    /// `k` greater than the number of stored vectors is clamped: all
    /// vectors are returned, ranked. An empty index yields an empty vec.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        debug_assert!(
            self.vectors.is_empty() || query.len() == self.dims,
            "query dimensionality must match the index"
        );

        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, squared_l2(query, v)))
            .collect();

        hits.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        hits.truncate(k.min(self.vectors.len()));
        hits
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality of the stored vectors (0 when empty).
    pub fn dimensions(&self) -> usize {
        self.dims
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

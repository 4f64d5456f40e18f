//! ONNX Runtime encoder.
//!
//! Runs a sentence-embedding model through `ort` (v2). Each call encodes
//! its texts as one right-padded batch, and pooling is attention-mask
//! aware so pad positions never dilute the mean. Rows come back unit-norm
//! and are rejected when the model's output width disagrees with the
//! configured dimensionality.

use std::path::Path;
use std::sync::Mutex;

use campus_core::errors::{CampusError, CampusResult, EmbeddingError};
use campus_core::traits::IEmbeddingProvider;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// Bucket count for the vocabulary-free tokenizer.
const BUCKETS: u32 = 30_000;
const CLS: i64 = 101;
const SEP: i64 = 102;
const PAD: i64 = 0;

/// ONNX-based sentence encoder.
#[derive(Debug)]
pub struct OnnxProvider {
    // Session::run needs &mut; the mutex restores the &self trait surface.
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Load a model from disk. A missing file and a session-build failure
    /// both surface as `EmbeddingError::ModelLoadFailed`.
    pub fn load(model_path: &str, dimensions: usize) -> CampusResult<Self> {
        let path = Path::new(model_path);
        if !path.is_file() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .and_then(|builder| Ok(builder.with_intra_threads(2)?))
            .and_then(|mut builder| builder.commit_from_file(model_path))
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("onnx-model")
            .to_string();
        debug!(model = %model_name, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    /// Encode a batch in one forward pass, right-padding every sequence
    /// to the widest one.
    fn encode_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let sequences: Vec<Vec<i64>> = texts.iter().map(|t| token_ids(t)).collect();
        let width = sequences.iter().map(Vec::len).max().unwrap_or(2);
        let batch = sequences.len();

        let mut ids = Vec::with_capacity(batch * width);
        let mut mask = Vec::with_capacity(batch * width);
        for sequence in &sequences {
            let pad = width - sequence.len();
            ids.extend_from_slice(sequence);
            ids.extend(std::iter::repeat(PAD).take(pad));
            mask.extend(std::iter::repeat(1i64).take(sequence.len()));
            mask.extend(std::iter::repeat(0i64).take(pad));
        }

        let tensor_shape = vec![batch as i64, width as i64];
        let id_input = Tensor::from_array((tensor_shape.clone(), ids))
            .map_err(|e| inference_error(e.to_string()))?;
        let mask_input = Tensor::from_array((tensor_shape, mask.clone()))
            .map_err(|e| inference_error(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_error(format!("session lock poisoned: {e}")))?;
        let outputs = session
            .run(ort::inputs![id_input, mask_input])
            .map_err(|e| inference_error(e.to_string()))?;

        let (_, value) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_error("model produced no outputs".to_string()))?;
        let (shape, data) = value
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_error(e.to_string()))?;

        pool_rows(shape, data, &mask, batch, width, self.dimensions)
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> CampusResult<Vec<f32>> {
        let mut rows = self.encode_batch(&[text.to_string()])?;
        rows.pop()
            .ok_or_else(|| inference_error("encoder returned no rows".to_string()))
    }

    fn embed_batch(&self, texts: &[String]) -> CampusResult<Vec<Vec<f32>>> {
        self.encode_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn inference_error(reason: String) -> CampusError {
    EmbeddingError::InferenceFailed { reason }.into()
}

/// Reduce the model output to one unit-norm row per batch entry.
///
/// Rank-3 output `[batch, width, dims]` is mean-pooled over the positions
/// the attention mask kept; rank-2 output `[batch, dims]` is taken as
/// already pooled. Any other rank, or a model width that disagrees with
/// `dims`, is an error.
fn pool_rows(
    shape: &[i64],
    data: &[f32],
    mask: &[i64],
    batch: usize,
    width: usize,
    dims: usize,
) -> CampusResult<Vec<Vec<f32>>> {
    let model_dims = shape.last().copied().unwrap_or(0) as usize;
    if model_dims != dims {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dims,
            actual: model_dims,
        }
        .into());
    }

    let mut rows = Vec::with_capacity(batch);
    match shape.len() {
        3 => {
            for b in 0..batch {
                let mut row = vec![0.0f32; dims];
                let mut kept = 0usize;
                for position in 0..width {
                    if mask[b * width + position] == 0 {
                        continue;
                    }
                    kept += 1;
                    let offset = (b * width + position) * dims;
                    for (slot, value) in row.iter_mut().zip(&data[offset..offset + dims]) {
                        *slot += *value;
                    }
                }
                if kept > 0 {
                    let scale = 1.0 / kept as f32;
                    for value in &mut row {
                        *value *= scale;
                    }
                }
                unit_norm(&mut row);
                rows.push(row);
            }
        }
        2 => {
            for b in 0..batch {
                let mut row = data[b * dims..(b + 1) * dims].to_vec();
                unit_norm(&mut row);
                rows.push(row);
            }
        }
        rank => {
            return Err(inference_error(format!("unsupported output rank {rank}")));
        }
    }
    Ok(rows)
}

fn unit_norm(row: &mut [f32]) {
    let norm = row.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for value in row {
            *value /= norm;
        }
    }
}

/// `[CLS] bucket-ids [SEP]`. Buckets are drawn from a blake3 digest of
/// each lower-cased word, so the mapping is stable across runs without
/// shipping a vocabulary file.
fn token_ids(text: &str) -> Vec<i64> {
    let mut ids = vec![CLS];
    for word in text.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        let digest = blake3::hash(word.to_lowercase().as_bytes());
        let mut prefix = [0u8; 4];
        prefix.copy_from_slice(&digest.as_bytes()[..4]);
        let bucket = u32::from_le_bytes(prefix) % BUCKETS;
        ids.push(i64::from(1 + bucket));
    }
    ids.push(SEP);
    ids
}

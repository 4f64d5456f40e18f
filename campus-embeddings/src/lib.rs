//! # campus-embeddings
//!
//! Dense encoding for the retrieval engine. A preferred provider (ONNX via
//! `ort` when a model is configured) sits in front of a deterministic
//! hashed term-frequency provider that is always available, so corpus
//! indexing can proceed in air-gapped environments. Query embeddings are
//! cached by content hash.

pub mod cache;
pub mod chain;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{HashedTfProvider, OnnxProvider};

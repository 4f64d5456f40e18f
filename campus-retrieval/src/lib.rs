//! # campus-retrieval
//!
//! The hybrid retrieval core: a dense channel (query embedding against a
//! flat squared-L2 vector index) fused with a sparse channel (TF-IDF dot
//! products over the corpus vocabulary), plus synonym query expansion in
//! front and token-budgeted context assembly behind.
//!
//! All index state is built once per corpus load and read-only afterwards;
//! rebuilding means constructing a new engine value.

pub mod assembler;
pub mod engine;
pub mod expansion;
pub mod index;
pub mod normalize;
pub mod sparse;

pub use assembler::ContextAssembler;
pub use engine::{RankedHit, RetrievalEngine};
pub use expansion::SynonymExpander;
pub use index::VectorIndex;
pub use normalize::normalize;
pub use sparse::TfidfIndex;

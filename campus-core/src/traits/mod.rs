//! Capability traits at the seams of the system.
//!
//! The retrieval core consumes these; concrete implementations live in the
//! other workspace crates or in the embedding host application.

mod embedding;
mod generation;
mod source;
mod tokens;

pub use embedding::IEmbeddingProvider;
pub use generation::IGenerator;
pub use source::IDocumentSource;
pub use tokens::ITokenCounter;

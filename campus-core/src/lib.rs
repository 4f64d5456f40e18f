//! # campus-core
//!
//! Foundation crate for the Campus retrieval-augmented assistant.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CampusConfig;
pub use errors::{CampusError, CampusResult};
pub use models::{ChatMessage, Document, DocumentMeta, Role};

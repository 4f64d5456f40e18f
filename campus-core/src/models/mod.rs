//! Plain data models shared across the workspace.

mod degradation_event;
mod document;
mod message;

pub use degradation_event::DegradationEvent;
pub use document::{Document, DocumentMeta};
pub use message::{ChatMessage, Role};

//! # campus-chat
//!
//! The thin glue around the retrieval core: loads the corpus from a
//! document store, keeps the session transcript, templates the generation
//! prompt, and absorbs per-turn failures at the conversation boundary so
//! the loop never crashes on a bad turn.

pub mod bot;
pub mod loader;
pub mod logging;
pub mod prompt;
pub mod session;

pub use bot::Assistant;
pub use loader::{decode_text, load_corpus};
pub use session::SessionState;

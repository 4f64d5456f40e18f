/// Token counting capability.
///
/// The context assembler enforces its budget through this trait so it can
/// be tested with a stub counter instead of a real tokenizer.
pub trait ITokenCounter: Send + Sync {
    /// Number of model tokens in `text`.
    fn count(&self, text: &str) -> usize;
}

/// Campus system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator inserted between documents in an assembled context block.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Minimum token length admitted by the corpus tokenizers.
pub const MIN_TOKEN_LEN: usize = 2;

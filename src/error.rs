use serde_json::error::Category;
use thiserror::Error;

/// Main error type for request encoding and decoding
#[derive(Error, Debug)]
pub enum DslError {
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type alias for DSL operations
pub type Result<T> = std::result::Result<T, DslError>;

impl DslError {
    /// Check if the input was not valid JSON at all, as opposed to valid JSON
    /// with the wrong shape for the target type
    ///
    /// Reflects the first error serde_json hit: a document that is both
    /// mis-shaped and truncated reports whichever problem it reached first.
    pub fn is_malformed(&self) -> bool {
        match self {
            DslError::Decode(e) => matches!(e.classify(), Category::Syntax | Category::Eof),
            DslError::Serialization(_) => false,
        }
    }
}

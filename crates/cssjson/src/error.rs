//! Error types for parsing and serialization.

/// Result type alias for cssjson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting stylesheets.
///
/// Malformed CSS is never an error; the parser absorbs it. These variants
/// cover resource limits and contract violations only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Block nesting exceeded the configured maximum depth.
    #[error("Stylesheet nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// A JSON value handed to the serializer is not a node.
    #[error("JSON value at '{path}' is not a node: expected an object with 'attributes' or 'children'")]
    NotANode { path: String },

    /// Malformed JSON text.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a nesting error.
    pub fn nesting_too_deep(limit: usize) -> Self {
        Self::NestingTooDeep { limit }
    }

    /// Create a node contract error.
    pub fn not_a_node(path: impl Into<String>) -> Self {
        Self::NotANode { path: path.into() }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON array of deals, got {0}")]
    NotAnArray(String),
}

/// Failure reported by a [`TextGenerator`](crate::generator::TextGenerator).
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

use dealsense_core::error::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl From<BedrockError> for GenerationError {
    fn from(err: BedrockError) -> Self {
        match err {
            BedrockError::Invocation(msg) => GenerationError::Invocation(msg),
            BedrockError::ResponseParse(msg) => GenerationError::ResponseParse(msg),
        }
    }
}

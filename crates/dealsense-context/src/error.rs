use std::path::PathBuf;

use dealsense_core::error::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("LLM client not available for context generation")]
    ClientUnavailable,

    #[error("Empty response from LLM")]
    EmptyResponse,

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("failed to read prompt template at {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ContextError {
    fn from(e: tera::Error) -> Self {
        ContextError::TemplateRender(crate::template::error_chain(&e))
    }
}

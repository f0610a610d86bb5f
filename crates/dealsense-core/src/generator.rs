use std::future::Future;
use std::pin::Pin;

use crate::error::GenerationError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Turns a prompt into natural-language text.
///
/// Implementations own their transport, credentials and any timeout policy.
/// Callers hold them as `Arc<dyn TextGenerator>` or `&dyn TextGenerator`.
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`, producing at most `max_tokens`
    /// output tokens.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_tokens: u32,
    ) -> BoxFuture<'a, Result<String, GenerationError>>;
}

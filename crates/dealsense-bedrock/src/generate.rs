//! Single-turn text generation via the Bedrock Converse API.
//!
//! The prompt is sent as one user message. `max_tokens` maps onto the
//! request's `inferenceConfig.maxTokens`; all text content blocks of the
//! reply are concatenated in order.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use dealsense_core::error::GenerationError;
use dealsense_core::generator::{BoxFuture, TextGenerator};
use tracing::info;

use crate::error::BedrockError;

/// A [`TextGenerator`] backed by a Bedrock model.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    system_prompt: Option<String>,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
            system_prompt: None,
        }
    }

    /// Send `system_prompt` as the Converse system block on every request.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Run one Converse round-trip and return the reply text.
    pub async fn converse(&self, prompt: &str, max_tokens: u32) -> Result<String, BedrockError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        let inference_config = InferenceConfiguration::builder()
            .max_tokens(i32::try_from(max_tokens).unwrap_or(i32::MAX))
            .build();

        info!(
            model_id = %self.model_id,
            prompt_len = prompt.len(),
            max_tokens,
            "invoking converse"
        );

        let mut request = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(inference_config);

        if let Some(system_prompt) = &self.system_prompt {
            request = request.system(SystemContentBlock::Text(system_prompt.clone()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        if let Some(usage) = response.usage() {
            info!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                "converse complete"
            );
        }

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

impl TextGenerator for BedrockGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_tokens: u32,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            self.converse(prompt, max_tokens)
                .await
                .map_err(GenerationError::from)
        })
    }
}

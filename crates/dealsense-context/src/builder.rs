//! Historical context generation from similar deals.
//!
//! [`ContextFormatter::build_context`] never fails: every outcome, including
//! provider errors, comes back as a string suitable for dropping straight
//! into the downstream sentiment prompt. Strings starting with `## ERROR`
//! mark failures.

use std::sync::Arc;

use dealsense_core::generator::TextGenerator;
use dealsense_core::models::activity::ActivityRecord;
use dealsense_core::models::deal::{DealMetadata, DealRecord};
use tracing::{error, info, warn};

use crate::config::ContextConfig;
use crate::error::ContextError;
use crate::format::format_deals;
use crate::template::PromptTemplate;

/// Output token budget for a context generation request.
pub const CONTEXT_MAX_TOKENS: u32 = 2000;

pub const NO_HISTORICAL_CONTEXT: &str =
    "## NO HISTORICAL CONTEXT AVAILABLE\nNo similar deals found for contextual analysis.";
pub const CLIENT_UNAVAILABLE: &str =
    "## ERROR\nLLM client not available for context generation.";
pub const EMPTY_RESPONSE: &str = "## ERROR\nEmpty response from LLM";
pub const CONTEXT_TRAILER: &str =
    "\n\n---\nUse this historical context to inform your sentiment analysis of the current deal.";

const ENABLED_COMPONENTS: &[&str] = &["LLMContextAnalysis"];

/// Builds historical context from similar deals with a read-only template.
pub struct ContextFormatter {
    client: Option<Arc<dyn TextGenerator>>,
    template: PromptTemplate,
}

impl ContextFormatter {
    /// Build a formatter using the default template location.
    pub fn new(client: Option<Arc<dyn TextGenerator>>) -> Self {
        Self::from_config(&ContextConfig::default(), client)
    }

    /// Build a formatter, reading the template named by `config` once.
    /// An unreadable template falls back to the built-in one.
    pub fn from_config(config: &ContextConfig, client: Option<Arc<dyn TextGenerator>>) -> Self {
        Self::with_template(PromptTemplate::load_or_fallback(&config.template_path), client)
    }

    pub fn with_template(template: PromptTemplate, client: Option<Arc<dyn TextGenerator>>) -> Self {
        info!(
            has_client = client.is_some(),
            template_origin = ?template.origin(),
            "context formatter initialized"
        );
        Self { client, template }
    }

    /// The template loaded at construction.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Generate historical context for `deal_id` from its similar deals.
    ///
    /// `activities` and `metadata` describe the current deal and are accepted
    /// for interface compatibility only. `client_override` takes precedence
    /// over the formatter's own client.
    pub async fn build_context(
        &self,
        deal_id: &str,
        _activities: &[ActivityRecord],
        _metadata: &DealMetadata,
        similar_deals: Option<&[DealRecord]>,
        client_override: Option<&dyn TextGenerator>,
    ) -> String {
        let similar_deals = match similar_deals {
            Some(deals) if !deals.is_empty() => deals,
            _ => return NO_HISTORICAL_CONTEXT.to_string(),
        };

        info!(
            deal_id,
            similar_deals = similar_deals.len(),
            "generating historical context"
        );

        match self.generate_context(similar_deals, client_override).await {
            Ok(context) => {
                info!(deal_id, "historical context generated");
                format!("{context}{CONTEXT_TRAILER}")
            }
            Err(ContextError::ClientUnavailable) => {
                error!(deal_id, "no LLM client available for context generation");
                CLIENT_UNAVAILABLE.to_string()
            }
            Err(ContextError::EmptyResponse) => {
                warn!(deal_id, "LLM returned an empty context response");
                EMPTY_RESPONSE.to_string()
            }
            Err(e) => {
                error!(deal_id, error = %e, "failed to generate historical context");
                format!("## ERROR\nFailed to generate historical context: {e}")
            }
        }
    }

    async fn generate_context(
        &self,
        similar_deals: &[DealRecord],
        client_override: Option<&dyn TextGenerator>,
    ) -> Result<String, ContextError> {
        let client: &dyn TextGenerator = match client_override {
            Some(client) => client,
            None => self
                .client
                .as_deref()
                .ok_or(ContextError::ClientUnavailable)?,
        };

        let deals_data = format_deals(similar_deals);
        let prompt = self.template.render(&deals_data)?;

        let response = client.generate(&prompt, CONTEXT_MAX_TOKENS).await?;

        let context = response.trim();
        if context.is_empty() {
            return Err(ContextError::EmptyResponse);
        }

        Ok(context.to_string())
    }

    /// Components contributing to the context. Always the single LLM analysis.
    pub fn enabled_components(&self) -> &'static [&'static str] {
        ENABLED_COMPONENTS
    }

    /// No-op retained for callers of the older component-based builder.
    pub fn add_component(&self, component: &str) {
        warn!(component, "add_component() not applicable for LLM-based context formatter");
    }

    /// No-op retained for callers of the older component-based builder.
    pub fn remove_component(&self, component_name: &str) {
        warn!(
            component = component_name,
            "remove_component() not applicable for LLM-based context formatter"
        );
    }
}

/// Create a formatter with the default template location.
pub fn create_context_formatter(client: Option<Arc<dyn TextGenerator>>) -> ContextFormatter {
    ContextFormatter::new(client)
}

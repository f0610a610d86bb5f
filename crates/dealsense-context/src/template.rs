//! Prompt template with a single `{{ similar_deals_data }}` substitution point.
//!
//! Templates use Tera syntax and are rendered with the formatted deals as the
//! only context variable. Any other variable fails at render time.

use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::{error, info, warn};

use crate::error::ContextError;

pub const SIMILAR_DEALS_PLACEHOLDER: &str = "similar_deals_data";

const TEMPLATE_NAME: &str = "similar_deals_context";

const FALLBACK_TEMPLATE: &str = "
You are a sales analytics expert. Analyze these similar deals and provide historical context:

{{ similar_deals_data }}

Generate analysis in this structure:
## SIMILAR DEALS CONTEXT
## SENTIMENT PATTERNS ANALYSIS
## LANGUAGE TONE ANALYSIS
## DEAL PROGRESSION PATTERNS
## CLIENT BEHAVIOR PATTERNS

Keep each section concise and actionable.
";

/// Where a template's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    File(PathBuf),
    Fallback,
    Inline,
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: String,
    origin: TemplateOrigin,
}

impl PromptTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            origin: TemplateOrigin::Inline,
        }
    }

    /// The built-in template covering the five analysis sections.
    pub fn fallback() -> Self {
        Self {
            source: FALLBACK_TEMPLATE.to_string(),
            origin: TemplateOrigin::Fallback,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ContextError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContextError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;

        let template = Self {
            source,
            origin: TemplateOrigin::File(path.to_path_buf()),
        };

        if !template.has_placeholder() {
            warn!(
                path = %path.display(),
                placeholder = SIMILAR_DEALS_PLACEHOLDER,
                "prompt template has no similar deals placeholder"
            );
        }

        info!(path = %path.display(), "loaded context analysis prompt");
        Ok(template)
    }

    /// Load `path`, or fall back to the built-in template if it cannot be read.
    pub fn load_or_fallback(path: &Path) -> Self {
        match Self::load(path) {
            Ok(template) => template,
            Err(e) => {
                error!(error = %e, "using fallback context analysis prompt");
                Self::fallback()
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> &TemplateOrigin {
        &self.origin
    }

    /// Whether the source references `similar_deals_data` in a `{{ }}` block.
    pub fn has_placeholder(&self) -> bool {
        self.source
            .split("{{")
            .skip(1)
            .filter_map(|segment| segment.split_once("}}"))
            .any(|(expr, _)| expr.trim() == SIMILAR_DEALS_PLACEHOLDER)
    }

    /// Render the template with `similar_deals_data` as its context.
    pub fn render(&self, similar_deals_data: &str) -> Result<String, ContextError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &self.source)
            .map_err(|e| ContextError::TemplateParse(error_chain(&e)))?;

        let mut context = Context::new();
        context.insert(SIMILAR_DEALS_PLACEHOLDER, similar_deals_data);

        let rendered = tera.render(TEMPLATE_NAME, &context)?;
        Ok(rendered)
    }
}

/// Tera reports the useful detail (undefined variable, parse position) in the
/// error's sources rather than its top-level message.
pub(crate) fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

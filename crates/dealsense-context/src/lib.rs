//! dealsense-context
//!
//! Turns a handful of retrieved similar deals into historical context for
//! deal sentiment analysis. Deals are rendered into a bounded prompt payload,
//! substituted into a prompt template and sent to a
//! [`TextGenerator`](dealsense_core::generator::TextGenerator); the reply is
//! returned with a fixed trailer.

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod template;

pub use builder::{create_context_formatter, ContextFormatter};
pub use config::ContextConfig;
pub use template::PromptTemplate;

//! dealsense-bedrock
//!
//! Bedrock Converse implementation of the text generation capability.

pub mod client;
pub mod error;
pub mod generate;

pub use client::{build_aws_config, BedrockSettings};
pub use generate::BedrockGenerator;

use serde::{Deserialize, Serialize};

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Where and how to reach Bedrock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockSettings {
    #[serde(default = "default_region")]
    pub region: String,
    /// Inference profile ID passed to Converse as `model_id`.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Named profile from `~/.aws`; `None` uses the default provider chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

impl Default for BedrockSettings {
    fn default() -> Self {
        Self {
            region: default_region(),
            model_id: default_model_id(),
            profile_name: None,
        }
    }
}

impl BedrockSettings {
    /// Read settings from `AWS_REGION`, `DEALSENSE_MODEL_ID` and `AWS_PROFILE`,
    /// keeping the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            region: std::env::var("AWS_REGION").unwrap_or(defaults.region),
            model_id: std::env::var("DEALSENSE_MODEL_ID").unwrap_or(defaults.model_id),
            profile_name: std::env::var("AWS_PROFILE").ok().filter(|p| !p.is_empty()),
        }
    }
}

/// Build an `SdkConfig` for the configured region and credential profile.
pub async fn build_aws_config(settings: &BedrockSettings) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()));

    if let Some(profile_name) = &settings.profile_name {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}

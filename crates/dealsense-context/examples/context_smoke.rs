//! Smoke test for historical context generation against Bedrock.
//!
//! Reads similar deals from a JSON file (or uses a built-in sample), builds
//! the context through a real Bedrock model, and prints the result.
//!
//! Usage:
//!   AWS_REGION=us-east-1 \
//!   DEALSENSE_MODEL_ID=us.anthropic.claude-sonnet-4-20250514-v1:0 \
//!   DEALSENSE_DEALS=similar_deals.json \
//!   cargo run -p dealsense-context --example context_smoke

use std::sync::Arc;

use dealsense_bedrock::{build_aws_config, BedrockGenerator, BedrockSettings};
use dealsense_context::{ContextConfig, ContextFormatter};
use dealsense_core::generator::TextGenerator;
use dealsense_core::models::deal::{parse_similar_deals, DealMetadata};

const SAMPLE_DEALS: &str = r#"[
  {
    "deal_id": "HS-1042",
    "metadata": {"outcome": "won", "deal_amount": 48000, "deal_stage": "closedwon", "total_activities": 23},
    "activities": [
      {"activity_type": "email", "content": "Client asked for a revised quote with annual billing."},
      {"activity_type": "call", "content": "Champion confirmed budget approval from finance."},
      {"activity_type": "meeting", "content": "Security review passed; legal redlines expected next week."}
    ]
  },
  {
    "deal_id": "HS-0988",
    "metadata": {"outcome": "lost", "deal_amount": 0, "deal_stage": "closedlost"},
    "activities": [
      {"activity_type": "email", "content": "Prospect went quiet after the pricing call."},
      {"activity_type": "note", "content": ""}
    ]
  }
]"#;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let deals_json = match std::env::var("DEALSENSE_DEALS") {
        Ok(path) => std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read deals from {path}: {e}"))?,
        Err(_) => SAMPLE_DEALS.to_string(),
    };
    let similar_deals = parse_similar_deals(&deals_json)?;

    let settings = BedrockSettings::from_env();
    let sdk_config = build_aws_config(&settings).await;
    let generator: Arc<dyn TextGenerator> =
        Arc::new(BedrockGenerator::new(&sdk_config, settings.model_id.clone()));

    let config = ContextConfig::resolve()?;
    let formatter = ContextFormatter::from_config(&config, Some(generator));

    println!("Region:        {}", settings.region);
    println!("Model:         {}", settings.model_id);
    println!("Template:      {}", config.template_path.display());
    println!("Similar deals: {}", similar_deals.len());
    println!();

    let context = formatter
        .build_context(
            "SMOKE-TEST",
            &[],
            &DealMetadata::default(),
            Some(similar_deals.as_slice()),
            None,
        )
        .await;

    println!("{context}");

    if context.starts_with("## ERROR") {
        return Err(eyre::eyre!("context generation failed"));
    }

    Ok(())
}

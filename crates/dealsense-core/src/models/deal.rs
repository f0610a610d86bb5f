use serde::{Deserialize, Serialize};

use super::activity::ActivityRecord;
use super::{lenient_count, lenient_text, null_as_default};
use crate::error::CoreError;

/// A previously closed or in-flight deal returned by similar-deal retrieval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub deal_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: DealMetadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<ActivityRecord>,
}

/// Summary fields attached to a deal. Every field may be missing; text
/// fields also take numbers, and the activity total takes whole floats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealMetadata {
    #[serde(default, deserialize_with = "lenient_text")]
    pub outcome: Option<String>,
    #[serde(default)]
    pub deal_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub deal_stage: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_activities: Option<u64>,
}

impl DealRecord {
    /// Identifier to display for the deal at 1-based `position`, falling back
    /// to `Deal_<position>` when retrieval did not supply one.
    pub fn display_id(&self, position: usize) -> String {
        match self.deal_id.as_deref() {
            Some(id) => id.to_string(),
            None => format!("Deal_{position}"),
        }
    }

    /// Recorded activity total, or the number of attached activities.
    pub fn total_activities(&self) -> u64 {
        self.metadata
            .total_activities
            .unwrap_or(self.activities.len() as u64)
    }
}

impl DealMetadata {
    pub fn outcome(&self) -> &str {
        self.outcome.as_deref().unwrap_or("unknown")
    }

    pub fn deal_amount(&self) -> f64 {
        self.deal_amount.unwrap_or(0.0)
    }

    pub fn deal_stage(&self) -> &str {
        self.deal_stage.as_deref().unwrap_or("unknown")
    }
}

/// Parse the similar-deals payload produced by retrieval.
///
/// Accepts a JSON array of deal objects. Missing or `null` fields take their
/// defaults; unknown fields are ignored.
pub fn parse_similar_deals(json: &str) -> Result<Vec<DealRecord>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        let kind = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Object(_) => "an object",
            serde_json::Value::Array(_) => "an array",
        };
        return Err(CoreError::NotAnArray(kind.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

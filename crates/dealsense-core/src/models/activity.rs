use serde::{Deserialize, Serialize};

/// A single logged interaction on a deal (email, call, note, ...).
///
/// Both fields are optional on the wire; use the accessors to read them
/// with their defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ActivityRecord {
    pub fn new(activity_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            activity_type: Some(activity_type.into()),
            content: Some(content.into()),
        }
    }

    /// Activity type, `"unknown"` when absent.
    pub fn activity_type(&self) -> &str {
        self.activity_type.as_deref().unwrap_or("unknown")
    }

    /// Raw content, empty when absent. Not trimmed.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

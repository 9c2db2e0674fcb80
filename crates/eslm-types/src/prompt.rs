//! User prompts and generated output deliveries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing label of a submitted prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PromptStatus {
    pub const ALL: [PromptStatus; 4] = [
        PromptStatus::Pending,
        PromptStatus::Processing,
        PromptStatus::Completed,
        PromptStatus::Failed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PromptStatus::Pending => "pending",
            PromptStatus::Processing => "processing",
            PromptStatus::Completed => "completed",
            PromptStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PromptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prompt submitted for UI generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrompt {
    pub id: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
    pub status: PromptStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Kind of artifact delivered for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Component,
    Style,
    Layout,
    Code,
}

/// Generated artifact tied to the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDelivery {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OutputKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub prompt_id: String,
}

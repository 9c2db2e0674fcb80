//! Tracked work items: capabilities, enablers and stories

use crate::status::{Metadata, Status};
use serde::{Deserialize, Serialize};

/// Top-level unit of tracked functionality.
///
/// `enablers`, `upstream_dependencies` and `downstream_impacts` hold names,
/// not ids. A name that matches no record is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub id: String,
    pub name: String,
    pub metadata: Metadata,
    pub description: String,
    #[serde(default)]
    pub enablers: Vec<String>,
    #[serde(default)]
    pub upstream_dependencies: Vec<String>,
    #[serde(default)]
    pub downstream_impacts: Vec<String>,
    #[serde(default)]
    pub implementation_notes: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

impl Capability {
    pub fn status(&self) -> Status {
        self.metadata.status
    }

    /// Case-insensitive substring match against id and name.
    ///
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.id.to_lowercase().contains(&needle)
    }
}

/// Partial capability payload for create/update requests.
///
/// Absent fields are left out of the request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enablers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_dependencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downstream_impacts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<Vec<String>>,
}

/// Sub-unit of work belonging to one capability, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enabler {
    pub id: String,
    pub name: String,
    pub metadata: Metadata,
    pub description: String,
    pub parent_capability: String,
    #[serde(default)]
    pub implementation_notes: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

/// Task counters reported alongside a story.
///
/// `progress` is supplied by the producer and is not derived from the counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryStatistics {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub progress: f64,
}

/// A unit of user-facing work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub name: String,
    pub metadata: Metadata,
    #[serde(default)]
    pub overview: String,
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub implementation_notes: String,
    #[serde(default)]
    pub flow_visualization: String,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub statistics: StoryStatistics,
}

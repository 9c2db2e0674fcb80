//! Status labels and record metadata
//!
//! Status values are inert display labels. There is no transition logic
//! between them; any label may follow any other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle label for tracked items (capabilities, enablers, stories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Implemented,
    Pending,
    Completed,
}

impl Status {
    /// The label exactly as shown on a badge and sent over the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Planned => "Planned",
            Status::InProgress => "In Progress",
            Status::Implemented => "Implemented",
            Status::Pending => "Pending",
            Status::Completed => "Completed",
        }
    }

    /// Badge tone used when rendering this status.
    pub fn tone(&self) -> BadgeTone {
        BadgeTone::for_label(self.label())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeTone {
    Planned,
    InProgress,
    Implemented,
    Pending,
    Danger,
}

impl BadgeTone {
    /// Map any badge label (item status, service status, or free text) to a tone.
    ///
    /// Unknown labels fall back to [`BadgeTone::Pending`].
    pub fn for_label(label: &str) -> Self {
        match label {
            "Planned" | "degraded" => BadgeTone::Planned,
            "In Progress" => BadgeTone::InProgress,
            "Implemented" | "Completed" | "healthy" => BadgeTone::Implemented,
            "unhealthy" => BadgeTone::Danger,
            _ => BadgeTone::Pending,
        }
    }
}

/// Kind of tracked item a metadata block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Capability,
    Enabler,
    Story,
    Requirement,
}

/// Metadata block attached to every tracked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub status: Status,
    /// Free-form generation timestamp, kept as the display string it arrives as.
    pub generated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Metadata {
    pub fn new(
        id: impl Into<String>,
        kind: ItemKind,
        status: Status,
        generated: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            status,
            generated: generated.into(),
            last_modified: None,
        }
    }
}

//! ESLM Types - Core record types for the UI design SLM dashboard
//!
//! Every record here mirrors the JSON shape exchanged with the ESLM backend
//! (camelCase field names). Cross-references between records are plain names,
//! not resolved links; nothing in this crate checks that a referenced name
//! exists.

#![deny(unsafe_code)]

pub mod flow;
pub mod governance;
pub mod health;
pub mod prompt;
pub mod slm;
pub mod stats;
pub mod status;
pub mod tracking;

pub use flow::{EdgeKind, FlowEdge, FlowNode, FlowNodeKind, FlowVisualization};
pub use governance::{AiGovernance, GovernanceKey, PresetLevel};
pub use health::{ServiceHealth, ServiceStatus};
pub use prompt::{OutputDelivery, OutputKind, PromptStatus, UserPrompt};
pub use slm::{SlmConfig, SlmConfigUpdate};
pub use stats::DashboardStats;
pub use status::{BadgeTone, ItemKind, Metadata, Status};
pub use tracking::{Capability, CapabilityDraft, Enabler, Story, StoryStatistics};

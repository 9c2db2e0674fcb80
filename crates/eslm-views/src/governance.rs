//! AI governance page

use crate::error::ViewResult;
use eslm_shared_state::AppContext;
use eslm_types::{AiGovernance, GovernanceKey, PresetLevel};
use serde::Serialize;
use tracing::info;

/// Guidance rules listed under the preset 2 policy summary.
pub const GUIDED_POLICY_RULES: [&str; 5] = [
    "Follow tasks in sequential order by default",
    "Warn when attempting to skip states",
    "Explain consequences of workflow deviations",
    "Suggest corrections when state mismatches detected",
    "Log all workflow deviations for review",
];

/// One switchable compliance control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GovernanceControl {
    pub key: GovernanceKey,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

impl GovernanceControl {
    pub fn state_label(&self) -> &'static str {
        if self.enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

fn control_text(key: GovernanceKey) -> (&'static str, &'static str) {
    match key {
        GovernanceKey::WorkflowCompliance => (
            "Workflow Compliance",
            "Follow state machine compliance and provide warnings",
        ),
        GovernanceKey::QualityGatesEnabled => (
            "Quality Gates",
            "Verify pre-conditions and recommend actions",
        ),
        GovernanceKey::DocumentationStandards => (
            "Documentation Standards",
            "Recommend template usage and highlight missing sections",
        ),
        GovernanceKey::SecurityCompliance => (
            "Security Compliance",
            "Check approval status before proceeding",
        ),
        GovernanceKey::PresetLevel => ("Preset Level", "Advisory display only"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceModel {
    pub preset_level: PresetLevel,
    pub preset_description: &'static str,
    pub controls: Vec<GovernanceControl>,
}

impl GovernanceModel {
    pub fn from_record(governance: &AiGovernance) -> Self {
        let controls = GovernanceKey::FLAGS
            .into_iter()
            .map(|key| {
                let (title, description) = control_text(key);
                GovernanceControl {
                    key,
                    title,
                    description,
                    enabled: governance.flag(key).unwrap_or(false),
                }
            })
            .collect();

        Self {
            preset_level: governance.preset_level,
            preset_description: governance.preset_level.description(),
            controls,
        }
    }

    pub fn build(ctx: &AppContext) -> ViewResult<Self> {
        Ok(Self::from_record(&ctx.app()?.ai_governance()))
    }

    /// Flip one control through the shared state and return the new model.
    pub fn toggle(ctx: &AppContext, key: GovernanceKey) -> ViewResult<Self> {
        let next = ctx.app()?.toggle_governance(key);
        info!(%key, enabled = ?next.flag(key), "Governance control changed");
        Ok(Self::from_record(&next))
    }
}

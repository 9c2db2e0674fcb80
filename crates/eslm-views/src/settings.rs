//! Settings page

use eslm_types::{PresetLevel, SlmConfig};
use serde::Serialize;

/// A system-level on/off switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemToggle {
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceInfo {
    pub workspace: &'static str,
    pub project: &'static str,
    pub governance: String,
    pub version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsModel {
    pub slm: SlmConfig,
    pub toggles: Vec<SystemToggle>,
    pub workspace: WorkspaceInfo,
}

impl SettingsModel {
    /// Settings as displayed for `slm`. The toggles and workspace block are
    /// fixed.
    pub fn build(slm: SlmConfig) -> Self {
        Self {
            slm,
            toggles: vec![
                SystemToggle {
                    title: "Data Collection",
                    description: "Enable training data collection",
                    enabled: true,
                },
                SystemToggle {
                    title: "Auto Fine-tuning",
                    description: "Automatically fine-tune model on new data",
                    enabled: false,
                },
                SystemToggle {
                    title: "API Access",
                    description: "Enable external API access",
                    enabled: true,
                },
            ],
            workspace: WorkspaceInfo {
                workspace: "BALUT",
                project: "ESLM - UI Design Small Language Model",
                governance: format!("Preset {} - Guided Recommendations", PresetLevel::Guided.level()),
                version: "1.0.0",
            },
        }
    }
}

impl Default for SettingsModel {
    fn default() -> Self {
        Self::build(SlmConfig::default())
    }
}

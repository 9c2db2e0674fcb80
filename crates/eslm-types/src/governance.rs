//! AI governance settings
//!
//! A single global record: one advisory preset level plus four compliance
//! flags. There is no history or versioning; a change replaces the record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named bundle of default compliance-flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PresetLevel {
    /// Level 1
    Advisory,
    /// Level 2
    Guided,
    /// Level 3
    Enforced,
}

impl PresetLevel {
    pub fn level(&self) -> u8 {
        match self {
            PresetLevel::Advisory => 1,
            PresetLevel::Guided => 2,
            PresetLevel::Enforced => 3,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetLevel::Advisory => "Awareness (Advisory) - Minimal guidance for early development",
            PresetLevel::Guided => {
                "Guided Recommendations (Suggested) - Active guidance with flexibility"
            }
            PresetLevel::Enforced => "Strict Enforcement (Required) - Full compliance required",
        }
    }
}

impl TryFrom<u8> for PresetLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PresetLevel::Advisory),
            2 => Ok(PresetLevel::Guided),
            3 => Ok(PresetLevel::Enforced),
            other => Err(format!("preset level must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<PresetLevel> for u8 {
    fn from(level: PresetLevel) -> Self {
        level.level()
    }
}

/// Field selector for [`AiGovernance::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GovernanceKey {
    PresetLevel,
    WorkflowCompliance,
    QualityGatesEnabled,
    DocumentationStandards,
    SecurityCompliance,
}

impl GovernanceKey {
    /// The four boolean flags, in display order.
    pub const FLAGS: [GovernanceKey; 4] = [
        GovernanceKey::WorkflowCompliance,
        GovernanceKey::QualityGatesEnabled,
        GovernanceKey::DocumentationStandards,
        GovernanceKey::SecurityCompliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GovernanceKey::PresetLevel => "presetLevel",
            GovernanceKey::WorkflowCompliance => "workflowCompliance",
            GovernanceKey::QualityGatesEnabled => "qualityGatesEnabled",
            GovernanceKey::DocumentationStandards => "documentationStandards",
            GovernanceKey::SecurityCompliance => "securityCompliance",
        }
    }
}

impl fmt::Display for GovernanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GovernanceKey {
    type Err = String;

    /// Accepts the camelCase wire name or a kebab/snake-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "presetlevel" => Ok(GovernanceKey::PresetLevel),
            "workflowcompliance" => Ok(GovernanceKey::WorkflowCompliance),
            "qualitygatesenabled" | "qualitygates" => Ok(GovernanceKey::QualityGatesEnabled),
            "documentationstandards" => Ok(GovernanceKey::DocumentationStandards),
            "securitycompliance" => Ok(GovernanceKey::SecurityCompliance),
            _ => Err(format!("unknown governance setting: {}", s)),
        }
    }
}

/// Global AI governance configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiGovernance {
    pub preset_level: PresetLevel,
    pub workflow_compliance: bool,
    pub quality_gates_enabled: bool,
    pub documentation_standards: bool,
    pub security_compliance: bool,
}

impl Default for AiGovernance {
    fn default() -> Self {
        Self {
            preset_level: PresetLevel::Guided,
            workflow_compliance: true,
            quality_gates_enabled: true,
            documentation_standards: true,
            security_compliance: true,
        }
    }
}

impl AiGovernance {
    /// Current value of a boolean flag. `None` for the preset level.
    pub fn flag(&self, key: GovernanceKey) -> Option<bool> {
        match key {
            GovernanceKey::PresetLevel => None,
            GovernanceKey::WorkflowCompliance => Some(self.workflow_compliance),
            GovernanceKey::QualityGatesEnabled => Some(self.quality_gates_enabled),
            GovernanceKey::DocumentationStandards => Some(self.documentation_standards),
            GovernanceKey::SecurityCompliance => Some(self.security_compliance),
        }
    }

    /// Return a copy with exactly one flag inverted.
    ///
    /// Toggling [`GovernanceKey::PresetLevel`] returns the record unchanged;
    /// the preset is display-only.
    pub fn toggle(&self, key: GovernanceKey) -> Self {
        let mut next = *self;
        match key {
            GovernanceKey::PresetLevel => {}
            GovernanceKey::WorkflowCompliance => {
                next.workflow_compliance = !next.workflow_compliance
            }
            GovernanceKey::QualityGatesEnabled => {
                next.quality_gates_enabled = !next.quality_gates_enabled
            }
            GovernanceKey::DocumentationStandards => {
                next.documentation_standards = !next.documentation_standards
            }
            GovernanceKey::SecurityCompliance => {
                next.security_compliance = !next.security_compliance
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_preset() -> impl Strategy<Value = PresetLevel> {
        prop_oneof![
            Just(PresetLevel::Advisory),
            Just(PresetLevel::Guided),
            Just(PresetLevel::Enforced),
        ]
    }

    fn arb_governance() -> impl Strategy<Value = AiGovernance> {
        (arb_preset(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(preset_level, a, b, c, d)| AiGovernance {
                preset_level,
                workflow_compliance: a,
                quality_gates_enabled: b,
                documentation_standards: c,
                security_compliance: d,
            },
        )
    }

    fn arb_flag() -> impl Strategy<Value = GovernanceKey> {
        prop::sample::select(GovernanceKey::FLAGS.to_vec())
    }

    proptest! {
        /// Toggling a flag inverts that flag and nothing else.
        #[test]
        fn toggle_inverts_only_the_selected_flag(gov in arb_governance(), key in arb_flag()) {
            let next = gov.toggle(key);

            prop_assert_eq!(next.flag(key), gov.flag(key).map(|v| !v));
            prop_assert_eq!(next.preset_level, gov.preset_level);
            for other in GovernanceKey::FLAGS.iter().filter(|k| **k != key) {
                prop_assert_eq!(next.flag(*other), gov.flag(*other));
            }
        }

        /// Toggling the preset level changes nothing.
        #[test]
        fn toggle_preset_level_is_noop(gov in arb_governance()) {
            prop_assert_eq!(gov.toggle(GovernanceKey::PresetLevel), gov);
        }
    }

    #[test]
    fn default_is_guided_with_all_flags_on() {
        let gov = AiGovernance::default();
        assert_eq!(gov.preset_level, PresetLevel::Guided);
        for key in GovernanceKey::FLAGS {
            assert_eq!(gov.flag(key), Some(true));
        }
    }

    #[test]
    fn preset_level_serializes_as_number() {
        let json = serde_json::to_value(AiGovernance::default()).unwrap();
        assert_eq!(json["presetLevel"], 2);
        assert_eq!(json["qualityGatesEnabled"], true);

        let bad = r#"{"presetLevel":4,"workflowCompliance":true,"qualityGatesEnabled":true,
            "documentationStandards":true,"securityCompliance":true}"#;
        assert!(serde_json::from_str::<AiGovernance>(bad).is_err());
    }

    #[test]
    fn key_parses_common_spellings() {
        assert_eq!(
            "qualityGatesEnabled".parse::<GovernanceKey>().unwrap(),
            GovernanceKey::QualityGatesEnabled
        );
        assert_eq!(
            "security-compliance".parse::<GovernanceKey>().unwrap(),
            GovernanceKey::SecurityCompliance
        );
        assert_eq!(
            "preset_level".parse::<GovernanceKey>().unwrap(),
            GovernanceKey::PresetLevel
        );
        assert!("theme".parse::<GovernanceKey>().is_err());
    }
}

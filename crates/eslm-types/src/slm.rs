//! Small language model configuration

use serde::{Deserialize, Serialize};

/// Model configuration read from and written to `/api/slm/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlmConfig {
    pub model_name: String,
    pub version: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub enabled: bool,
}

impl Default for SlmConfig {
    fn default() -> Self {
        Self {
            model_name: "DELM-UI-v1.0".to_string(),
            version: "1.0.0".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            enabled: true,
        }
    }
}

/// Partial update payload for the model configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlmConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl SlmConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err("temperature must be between 0.0 and 2.0".to_string());
            }
        }

        if let Some(max_tokens) = self.max_tokens {
            if max_tokens == 0 {
                return Err("max_tokens must be greater than 0".to_string());
            }
        }

        Ok(())
    }

    /// Overlay the present fields onto `current`.
    pub fn apply(self, mut current: SlmConfig) -> SlmConfig {
        if let Some(model_name) = self.model_name {
            current.model_name = model_name;
        }
        if let Some(version) = self.version {
            current.version = version;
        }
        if let Some(temperature) = self.temperature {
            current.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            current.max_tokens = max_tokens;
        }
        if let Some(enabled) = self.enabled {
            current.enabled = enabled;
        }
        current
    }
}

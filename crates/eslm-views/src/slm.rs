//! SLM engine page: prompt input and generated output history

use crate::error::ViewResult;
use eslm_engine::{EngineConfig, GeneratedOutput, Generation, SlmEngine};
use serde::Serialize;
use tracing::debug;

/// Shown in place of the history before the first output arrives.
pub const EMPTY_OUTPUTS_MESSAGE: &str =
    "No outputs yet. Enter a prompt above to generate UI components.";

/// Static model summary shown above the prompt box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub model: &'static str,
    pub status: &'static str,
    pub avg_response: &'static str,
}

pub const MODEL_INFO: ModelInfo = ModelInfo {
    model: "DELM v1.0",
    status: "Online",
    avg_response: "1.2s",
};

/// Local state of the SLM engine page.
#[derive(Debug, Default)]
pub struct SlmEngineView {
    input: String,
    engine: SlmEngine,
}

impl SlmEngineView {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            input: String::new(),
            engine: SlmEngine::new(config),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Submit the current input.
    ///
    /// A blank input is ignored and returns `None`. Otherwise the prompt is
    /// captured, the input is cleared straight away, and the running
    /// generation is returned. The input is left intact if the engine
    /// refuses the submission.
    pub fn submit(&mut self) -> ViewResult<Option<Generation>> {
        if !self.can_submit() {
            debug!("Ignoring blank prompt");
            return Ok(None);
        }

        let generation = self.engine.submit(&self.input)?;
        self.input.clear();
        Ok(Some(generation))
    }

    pub fn is_generating(&self) -> bool {
        self.engine.in_flight() > 0
    }

    /// Generated outputs, newest first.
    pub fn outputs(&self) -> Vec<GeneratedOutput> {
        self.engine.outputs()
    }

    pub fn engine(&self) -> &SlmEngine {
        &self.engine
    }
}

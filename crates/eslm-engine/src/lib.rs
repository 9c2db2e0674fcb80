//! ESLM Engine - Simulated small language model generation
//!
//! Generation is a placeholder for a backend call: each submission becomes a
//! background task that waits a fixed delay and then records one output.
//! Tasks can be cancelled before they complete, and the engine can be
//! configured to refuse a new submission while another is still in flight.

#![deny(unsafe_code)]

pub mod engine;
pub mod error;

pub use engine::{
    render_component, EngineConfig, EngineEvent, GeneratedOutput, Generation, SlmEngine,
    SubmissionPolicy, DEFAULT_GENERATION_DELAY,
};
pub use error::{EngineError, EngineResult};

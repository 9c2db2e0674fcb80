//! Deferred generation tasks and output history

use crate::error::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info};
use uuid::Uuid;

/// Delay before a simulated generation resolves
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Channel capacity for engine events
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// How concurrent submissions are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Every submission runs independently and appends its own output
    #[default]
    Concurrent,
    /// A submission is refused while another is in flight
    SingleFlight,
}

/// Engine configuration
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub delay: Duration,
    pub policy: SubmissionPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_GENERATION_DELAY,
            policy: SubmissionPolicy::Concurrent,
        }
    }
}

/// One completed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedOutput {
    pub id: String,
    pub prompt: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Lifecycle notifications for generation tasks.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    Started { id: Uuid },
    Completed { id: Uuid, output: GeneratedOutput },
    Cancelled { id: Uuid },
}

/// Render the placeholder component returned for a prompt.
pub fn render_component(prompt: &str) -> String {
    format!(
        r#"Generated UI component for: "{prompt}"

```tsx
import React from 'react';

export const GeneratedComponent: React.FC = () => {{
  return (
    <div className="p-4 bg-white rounded-lg shadow">
      <h2 className="text-xl font-bold">Generated UI</h2>
      <p>Based on your prompt: {prompt}</p>
    </div>
  );
}};
```"#
    )
}

/// In-flight generations. An entry is reserved before its task is spawned and
/// the abort handle is attached once the spawn has returned.
type TaskTable = Arc<Mutex<HashMap<Uuid, Option<AbortHandle>>>>;

/// Remove `id` from the table and abort its task, if it is still registered.
fn cancel_task(tasks: &TaskTable, id: Uuid) -> bool {
    let entry = tasks.lock().remove(&id);
    match entry {
        Some(handle) => {
            if let Some(handle) = handle {
                handle.abort();
            }
            true
        }
        None => false,
    }
}

/// Removes a task from the in-flight table when its future is dropped,
/// whether it completed or was aborted.
struct InFlightGuard {
    id: Uuid,
    tasks: TaskTable,
    events: broadcast::Sender<EngineEvent>,
    completed: bool,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.tasks.lock().remove(&self.id);
        if !self.completed {
            debug!(id = %self.id, "Generation cancelled");
            let _ = self.events.send(EngineEvent::Cancelled { id: self.id });
        }
    }
}

/// Handle to one submitted generation.
#[derive(Debug)]
pub struct Generation {
    id: Uuid,
    handle: JoinHandle<GeneratedOutput>,
    tasks: TaskTable,
}

impl Generation {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Cancel the generation. Has no effect once it has completed.
    ///
    /// The generation stops counting as in flight immediately.
    pub fn cancel(&self) {
        cancel_task(&self.tasks, self.id);
        self.handle.abort();
    }

    /// Wait for the generation to finish.
    pub async fn wait(self) -> EngineResult<GeneratedOutput> {
        self.handle.await.map_err(|e| {
            if e.is_cancelled() {
                EngineError::Cancelled
            } else {
                EngineError::Task(e.to_string())
            }
        })
    }
}

/// Simulated small language model.
///
/// Outputs are kept newest first.
#[derive(Debug)]
pub struct SlmEngine {
    config: EngineConfig,
    outputs: Arc<RwLock<Vec<GeneratedOutput>>>,
    tasks: TaskTable,
    events: broadcast::Sender<EngineEvent>,
}

impl Default for SlmEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SlmEngine {
    pub fn new(config: EngineConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            outputs: Arc::new(RwLock::new(Vec::new())),
            tasks: Arc::new(Mutex::new(HashMap::new())),
            events,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Submit a prompt. Must be called from within a Tokio runtime.
    ///
    /// After the configured delay one [`GeneratedOutput`] is prepended to the
    /// history. The prompt is captured at submission time.
    pub fn submit(&self, prompt: &str) -> EngineResult<Generation> {
        if prompt.trim().is_empty() {
            return Err(EngineError::EmptyPrompt);
        }

        let id = Uuid::new_v4();
        {
            let mut tasks = self.tasks.lock();
            if self.config.policy == SubmissionPolicy::SingleFlight && !tasks.is_empty() {
                debug!("Refusing submission while a generation is in flight");
                return Err(EngineError::Busy);
            }
            tasks.insert(id, None);
        }

        // The lock is not held across spawn: a runtime that is shutting down
        // drops the future in place, and its guard takes the lock.
        let prompt = prompt.to_string();
        let delay = self.config.delay;
        let outputs = self.outputs.clone();
        let events = self.events.clone();
        let mut guard = InFlightGuard {
            id,
            tasks: self.tasks.clone(),
            events: self.events.clone(),
            completed: false,
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let output = GeneratedOutput {
                id: id.to_string(),
                response: render_component(&prompt),
                prompt,
                timestamp: Utc::now(),
            };
            outputs.write().insert(0, output.clone());
            guard.completed = true;
            info!(id = %id, "Generation completed");
            let _ = events.send(EngineEvent::Completed {
                id,
                output: output.clone(),
            });
            drop(guard);
            output
        });

        let abort = handle.abort_handle();
        match self.tasks.lock().get_mut(&id) {
            Some(slot) => *slot = Some(abort),
            // Cancelled or finished before the handle was attached
            None => abort.abort(),
        }

        debug!(id = %id, delay_ms = delay.as_millis() as u64, "Generation started");
        let _ = self.events.send(EngineEvent::Started { id });

        Ok(Generation {
            id,
            handle,
            tasks: self.tasks.clone(),
        })
    }

    /// Cancel an in-flight generation by id. Returns whether it was found.
    pub fn cancel(&self, id: Uuid) -> bool {
        cancel_task(&self.tasks, id)
    }

    /// Cancel every in-flight generation.
    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = self.tasks.lock().drain().filter_map(|(_, h)| h).collect();
        for handle in handles {
            handle.abort();
        }
    }

    /// Number of generations still waiting on their delay.
    pub fn in_flight(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Completed outputs, newest first.
    pub fn outputs(&self) -> Vec<GeneratedOutput> {
        self.outputs.read().clone()
    }
}

impl Drop for SlmEngine {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(policy: SubmissionPolicy) -> SlmEngine {
        SlmEngine::new(EngineConfig {
            delay: DEFAULT_GENERATION_DELAY,
            policy,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn output_appears_only_after_delay() {
        let engine = engine(SubmissionPolicy::Concurrent);
        let generation = engine.submit("navigation bar").unwrap();

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(engine.outputs().is_empty());
        assert_eq!(engine.in_flight(), 1);

        let output = generation.wait().await.unwrap();
        assert_eq!(output.prompt, "navigation bar");
        assert!(output.response.contains("Based on your prompt: navigation bar"));
        assert_eq!(engine.outputs(), vec![output]);
        assert_eq!(engine.in_flight(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_submissions_each_append() {
        let engine = engine(SubmissionPolicy::Concurrent);
        let first = engine.submit("first").unwrap();
        let second = engine.submit("second").unwrap();
        assert_eq!(engine.in_flight(), 2);

        first.wait().await.unwrap();
        second.wait().await.unwrap();

        assert_eq!(engine.outputs().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn single_flight_refuses_overlap() {
        let engine = engine(SubmissionPolicy::SingleFlight);
        let first = engine.submit("first").unwrap();

        assert!(matches!(engine.submit("second"), Err(EngineError::Busy)));

        first.wait().await.unwrap();
        let third = engine.submit("third").unwrap();
        third.wait().await.unwrap();

        let prompts: Vec<_> = engine.outputs().into_iter().map(|o| o.prompt).collect();
        assert_eq!(prompts, vec!["third", "first"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_generation_appends_nothing() {
        let engine = engine(SubmissionPolicy::Concurrent);
        let mut events = engine.subscribe();
        let generation = engine.submit("cancel me").unwrap();

        tokio::time::sleep(Duration::from_millis(500)).await;
        generation.cancel();

        assert!(matches!(generation.wait().await, Err(EngineError::Cancelled)));
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(engine.outputs().is_empty());
        assert_eq!(engine.in_flight(), 0);

        assert!(matches!(events.recv().await.unwrap(), EngineEvent::Started { .. }));
        assert!(matches!(events.recv().await.unwrap(), EngineEvent::Cancelled { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_by_id_frees_single_flight_slot() {
        let engine = engine(SubmissionPolicy::SingleFlight);
        let generation = engine.submit("slow").unwrap();

        assert!(engine.cancel(generation.id()));
        assert!(!engine.cancel(generation.id()));
        assert!(matches!(generation.wait().await, Err(EngineError::Cancelled)));

        assert!(engine.submit("next").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_through_handle_frees_single_flight_slot() {
        let engine = engine(SubmissionPolicy::SingleFlight);
        let generation = engine.submit("slow").unwrap();

        generation.cancel();
        assert_eq!(engine.in_flight(), 0);

        let next = engine.submit("next").unwrap();
        assert!(matches!(generation.wait().await, Err(EngineError::Cancelled)));
        assert_eq!(next.wait().await.unwrap().prompt, "next");
        assert_eq!(engine.outputs().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_completion_is_harmless() {
        let engine = engine(SubmissionPolicy::SingleFlight);
        let generation = engine.submit("done").unwrap();
        tokio::time::sleep(DEFAULT_GENERATION_DELAY + Duration::from_millis(1)).await;

        assert_eq!(engine.in_flight(), 0);
        generation.cancel();
        assert!(!engine.cancel(generation.id()));
        assert_eq!(generation.wait().await.unwrap().prompt, "done");
        assert_eq!(engine.outputs().len(), 1);
    }

    #[test]
    fn submit_on_a_shut_down_runtime_does_not_hang() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let handle = runtime.handle().clone();
        runtime.shutdown_background();

        let _guard = handle.enter();
        let engine = engine(SubmissionPolicy::SingleFlight);
        let _ = engine.submit("late");
        assert_eq!(engine.in_flight(), 0);
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected() {
        let engine = SlmEngine::default();
        assert!(matches!(engine.submit("   "), Err(EngineError::EmptyPrompt)));
        assert_eq!(engine.in_flight(), 0);
    }

    #[test]
    fn rendered_component_embeds_prompt() {
        let text = render_component("a card");
        assert!(text.starts_with("Generated UI component for: \"a card\""));
        assert!(text.contains("export const GeneratedComponent: React.FC = () => {"));
    }
}

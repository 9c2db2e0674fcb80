//! Prompt history page
//!
//! Shows a fixed set of sample prompts; it does not read the shared state.

use chrono::{DateTime, Duration, Utc};
use eslm_types::{PromptStatus, UserPrompt};
use serde::Serialize;

/// Per-status counts shown above the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PromptStats {
    pub total: usize,
    pub completed: usize,
    pub processing: usize,
    pub pending: usize,
    pub failed: usize,
}

impl PromptStats {
    pub fn count(prompts: &[UserPrompt]) -> Self {
        let of = |status: PromptStatus| prompts.iter().filter(|p| p.status == status).count();
        Self {
            total: prompts.len(),
            completed: of(PromptStatus::Completed),
            processing: of(PromptStatus::Processing),
            pending: of(PromptStatus::Pending),
            failed: of(PromptStatus::Failed),
        }
    }
}

/// The four sample prompt-history records, timestamped relative to `now`.
pub fn sample_prompts(now: DateTime<Utc>) -> Vec<UserPrompt> {
    let prompt = |id: &str, text: &str, status: PromptStatus, age: Duration, response: Option<&str>| {
        UserPrompt {
            id: id.to_string(),
            prompt: text.to_string(),
            timestamp: now - age,
            status,
            response: response.map(str::to_string),
        }
    };

    vec![
        prompt(
            "1",
            "Create a responsive card component with image, title, and description",
            PromptStatus::Completed,
            Duration::hours(1),
            Some("Generated CardComponent.tsx with responsive design and Tailwind styling"),
        ),
        prompt(
            "2",
            "Design a navigation bar with dropdown menus",
            PromptStatus::Completed,
            Duration::hours(2),
            Some("Generated NavBar.tsx with dropdown functionality"),
        ),
        prompt(
            "3",
            "Build a form with validation for user registration",
            PromptStatus::Processing,
            Duration::zero(),
            None,
        ),
        prompt(
            "4",
            "Create a dashboard layout with sidebar",
            PromptStatus::Pending,
            Duration::zero(),
            None,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptsModel {
    pub stats: PromptStats,
    pub history: Vec<UserPrompt>,
}

impl PromptsModel {
    pub fn build(now: DateTime<Utc>) -> Self {
        let history = sample_prompts(now);
        Self {
            stats: PromptStats::count(&history),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counts() {
        let model = PromptsModel::build(Utc::now());
        assert_eq!(
            model.stats,
            PromptStats {
                total: 4,
                completed: 2,
                processing: 1,
                pending: 1,
                failed: 0,
            }
        );
    }

    #[test]
    fn only_completed_prompts_carry_a_response() {
        for prompt in sample_prompts(Utc::now()) {
            assert_eq!(
                prompt.response.is_some(),
                prompt.status == PromptStatus::Completed
            );
        }
    }

    #[test]
    fn timestamps_are_relative_to_now() {
        let now = Utc::now();
        let prompts = sample_prompts(now);
        assert_eq!(prompts[0].timestamp, now - Duration::hours(1));
        assert_eq!(prompts[3].timestamp, now);
    }
}

//! User stories page

use eslm_types::Status;
use serde::Serialize;

/// A story as listed on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryCard {
    pub id: &'static str,
    pub name: &'static str,
    pub status: Status,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoriesModel {
    pub stories: Vec<StoryCard>,
}

impl StoriesModel {
    pub fn build() -> Self {
        Self {
            stories: sample_stories(),
        }
    }
}

pub fn sample_stories() -> Vec<StoryCard> {
    vec![
        StoryCard {
            id: "STORY-001",
            name: "UI Component Generation",
            status: Status::InProgress,
            progress: 65,
            description: "Generate React components from natural language descriptions",
        },
        StoryCard {
            id: "STORY-002",
            name: "Design System Integration",
            status: Status::Planned,
            progress: 0,
            description: "Integrate with existing design systems and style guides",
        },
        StoryCard {
            id: "STORY-003",
            name: "Multi-format Export",
            status: Status::Pending,
            progress: 20,
            description: "Export generated components in multiple formats",
        },
        StoryCard {
            id: "STORY-004",
            name: "Real-time Preview",
            status: Status::Implemented,
            progress: 100,
            description: "Preview generated components in real-time",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_samples_with_valid_progress() {
        let model = StoriesModel::build();
        assert_eq!(model.stories.len(), 4);
        assert!(model.stories.iter().all(|s| s.progress <= 100));
        assert_eq!(model.stories[3].status, Status::Implemented);
    }
}

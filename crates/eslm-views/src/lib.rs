//! ESLM Views - Route table and per-page view models
//!
//! Each navigable route has a view model that reads from the shared
//! application state (through an [`eslm_shared_state::AppContext`]) and
//! produces plain data for a front-end to render. Views hold only their own
//! local UI state (search term, selection, input buffer).

#![deny(unsafe_code)]

pub mod capabilities;
pub mod dashboard;
pub mod error;
pub mod governance;
pub mod health;
pub mod prompts;
pub mod route;
pub mod settings;
pub mod slm;
pub mod stories;

pub use capabilities::{CapabilitiesView, CapabilityCard, DetailPanel};
pub use dashboard::{DashboardModel, StatCard};
pub use error::{ViewError, ViewResult};
pub use governance::{GovernanceControl, GovernanceModel};
pub use health::{HealthBand, HealthModel};
pub use prompts::{PromptsModel, PromptStats};
pub use route::Route;
pub use settings::{SettingsModel, SystemToggle};
pub use slm::{ModelInfo, SlmEngineView, MODEL_INFO};
pub use stories::{StoriesModel, StoryCard};

//! Navigable routes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Capabilities,
    SlmEngine,
    Prompts,
    Health,
    Stories,
    Governance,
    Settings,
}

impl Route {
    /// Routes in navigation order.
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Capabilities,
        Route::SlmEngine,
        Route::Prompts,
        Route::Health,
        Route::Stories,
        Route::Governance,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Capabilities => "/capabilities",
            Route::SlmEngine => "/slm",
            Route::Prompts => "/prompts",
            Route::Health => "/health",
            Route::Stories => "/stories",
            Route::Governance => "/governance",
            Route::Settings => "/settings",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Capabilities => "Capabilities",
            Route::SlmEngine => "SLM Engine",
            Route::Prompts => "Prompts",
            Route::Health => "Health",
            Route::Stories => "Stories",
            Route::Governance => "AI Governance",
            Route::Settings => "Settings",
        }
    }

    /// Match a path exactly. Unknown paths fall back to the dashboard.
    pub fn parse(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or(Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

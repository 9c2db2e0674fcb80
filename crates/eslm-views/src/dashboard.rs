//! Dashboard landing page

use crate::error::ViewResult;
use eslm_shared_state::AppContext;
use eslm_types::{Capability, ServiceHealth};
use serde::Serialize;

/// Number of capabilities listed under "Recent Capabilities".
pub const RECENT_CAPABILITIES: usize = 5;

/// One headline statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

/// What the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardModel {
    /// No statistics have been loaded yet.
    Loading,
    Ready {
        cards: Vec<StatCard>,
        recent_capabilities: Vec<Capability>,
        services: Vec<ServiceHealth>,
    },
}

impl DashboardModel {
    pub fn build(ctx: &AppContext) -> ViewResult<Self> {
        let app = ctx.app()?;
        let Some(stats) = app.dashboard_stats() else {
            return Ok(DashboardModel::Loading);
        };

        let cards = vec![
            StatCard {
                title: "Capabilities",
                value: format!(
                    "{}/{}",
                    stats.implemented_capabilities, stats.total_capabilities
                ),
            },
            StatCard {
                title: "Enablers",
                value: format!("{}/{}", stats.implemented_enablers, stats.total_enablers),
            },
            StatCard {
                title: "Stories",
                value: format!("{}/{}", stats.completed_stories, stats.total_stories),
            },
            StatCard {
                title: "Service Health",
                value: format!("{}%", stats.service_health),
            },
        ];

        Ok(DashboardModel::Ready {
            cards,
            recent_capabilities: app
                .capabilities()
                .iter()
                .take(RECENT_CAPABILITIES)
                .cloned()
                .collect(),
            services: app.service_health().to_vec(),
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardModel::Loading)
    }
}

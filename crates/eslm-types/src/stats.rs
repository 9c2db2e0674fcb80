//! Dashboard aggregate statistics

use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard.
///
/// Supplied independently of the record collections; nothing recomputes
/// these from the capabilities, enablers or stories actually held, and no
/// ordering between the counters (e.g. implemented <= total) is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_capabilities: u32,
    pub implemented_capabilities: u32,
    pub total_enablers: u32,
    pub implemented_enablers: u32,
    pub total_stories: u32,
    pub completed_stories: u32,
    /// Aggregate service health percentage
    pub service_health: f64,
}

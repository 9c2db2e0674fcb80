//! Service health records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time status of a monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status/latency/uptime snapshot for one logical service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub id: String,
    pub name: String,
    pub status: ServiceStatus,
    pub last_check: DateTime<Utc>,
    /// Response time in milliseconds
    pub response_time: u64,
    /// Uptime percentage (0.0 to 100.0)
    pub uptime: f64,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_record() {
        let json = r#"{
            "id": "3",
            "name": "Output Delivery",
            "status": "degraded",
            "lastCheck": "2025-11-22T10:03:26Z",
            "responseTime": 350,
            "uptime": 98.2
        }"#;

        let health: ServiceHealth = serde_json::from_str(json).unwrap();
        assert_eq!(health.status, ServiceStatus::Degraded);
        assert_eq!(health.response_time, 350);
        assert!(!health.is_healthy());
    }
}

//! CLI command implementations

pub mod capabilities;
pub mod dashboard;
pub mod governance;
pub mod health;
pub mod prompts;
pub mod route;
pub mod settings;
pub mod slm;
pub mod stories;

use crate::output::badge;
use eslm_types::{Capability, ServiceHealth};
use serde::Serialize;
use tabled::Tabled;

/// Capability summary row
#[derive(Debug, Serialize, Tabled)]
pub struct CapabilityRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "ENABLERS")]
    pub enablers: String,
}

impl CapabilityRow {
    pub fn new(id: &str, name: &str, status: &str, enablers: String) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status: badge(status).to_string(),
            enablers,
        }
    }
}

impl From<&Capability> for CapabilityRow {
    fn from(c: &Capability) -> Self {
        Self::new(
            &c.id,
            &c.name,
            c.status().label(),
            c.enablers.len().to_string(),
        )
    }
}

/// Service health row
#[derive(Debug, Serialize, Tabled)]
pub struct ServiceRow {
    #[tabled(rename = "SERVICE")]
    pub name: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "RESPONSE")]
    pub response_time: String,
    #[tabled(rename = "UPTIME")]
    pub uptime: String,
    #[tabled(rename = "LAST CHECK")]
    pub last_check: String,
}

impl From<&ServiceHealth> for ServiceRow {
    fn from(s: &ServiceHealth) -> Self {
        Self {
            name: s.name.clone(),
            status: badge(s.status.label()).to_string(),
            response_time: format!("{}ms", s.response_time),
            uptime: format!("{}%", s.uptime),
            last_check: s.last_check.format("%H:%M:%S").to_string(),
        }
    }
}

//! Fixed sample records used to seed a new session

use chrono::{DateTime, Utc};
use eslm_types::{
    Capability, DashboardStats, ItemKind, Metadata, ServiceHealth, ServiceStatus, Status,
};

const SEED_GENERATED: &str = "11/22/2025, 10:03:26 AM";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn capability(
    id: &str,
    name: &str,
    status: Status,
    generated: &str,
    description: &str,
    enablers: &[&str],
    upstream: &[&str],
    downstream: &[&str],
    notes: &str,
    criteria: &[&str],
) -> Capability {
    Capability {
        id: id.to_string(),
        name: name.to_string(),
        metadata: Metadata::new(id, ItemKind::Capability, status, generated),
        description: description.to_string(),
        enablers: strings(enablers),
        upstream_dependencies: strings(upstream),
        downstream_impacts: strings(downstream),
        implementation_notes: notes.to_string(),
        acceptance_criteria: strings(criteria),
    }
}

/// The five sample capabilities.
pub fn sample_capabilities() -> Vec<Capability> {
    vec![
        capability(
            "CAP-008",
            "Small Language Model for UI Design",
            Status::Planned,
            SEED_GENERATED,
            "Core SLM capability for generating UI design solutions",
            &[
                "Environment Setup Service",
                "TAD Service",
                "TDC Service",
                "Transformer Service",
                "Data Collection Services",
                "SLM Trainer",
                "Design Experience Small Language Model Engine",
                "DELM Fine Tuning Service",
            ],
            &[],
            &[
                "Dependency Management",
                "Output Delivery System",
                "Flow Visualization",
                "User Prompt Service",
            ],
            "Requires transformer architecture with specialized tokenizer for UI design patterns",
            &["Model generates valid UI components", "Response time under 2 seconds"],
        ),
        capability(
            "CAP-318652",
            "Capability Tracking",
            Status::Implemented,
            "11/22/2025, 10:24:01 AM",
            "Track and manage all system capabilities and their dependencies",
            &["Capability Service Endpoint", "Health Monitoring"],
            &["Design Artifact Management", "Figma Integration Management"],
            &[],
            "Uses graph-based dependency tracking",
            &["All capabilities tracked", "Dependencies visualized"],
        ),
        capability(
            "CAP-011",
            "Output Delivery System",
            Status::InProgress,
            SEED_GENERATED,
            "Delivers generated UI designs to users",
            &[],
            &["Small Language Model for UI Design"],
            &[],
            "Supports multiple output formats",
            &["Delivers all output types", "Maintains formatting"],
        ),
        capability(
            "CAP-015",
            "User Prompt Service",
            Status::InProgress,
            SEED_GENERATED,
            "Handles user prompts for UI design generation",
            &[],
            &["Small Language Model for UI Design"],
            &[],
            "Natural language processing for design intent",
            &["Processes natural language", "Extracts design intent"],
        ),
        capability(
            "CAP-004",
            "System Health Monitoring",
            Status::Planned,
            SEED_GENERATED,
            "Monitor system health and service status",
            &["Microservices Health Monitoring Enabler"],
            &[],
            &[],
            "Real-time health checks with alerting",
            &["All services monitored", "Alerts functional"],
        ),
    ]
}

/// The four sample service-health entries, all checked at `checked_at`.
pub fn sample_service_health(checked_at: DateTime<Utc>) -> Vec<ServiceHealth> {
    let entry = |id: &str, name: &str, status: ServiceStatus, response_time: u64, uptime: f64| ServiceHealth {
        id: id.to_string(),
        name: name.to_string(),
        status,
        last_check: checked_at,
        response_time,
        uptime,
    };

    vec![
        entry("1", "SLM Engine", ServiceStatus::Healthy, 45, 99.9),
        entry("2", "Transformer Service", ServiceStatus::Healthy, 120, 99.5),
        entry("3", "Output Delivery", ServiceStatus::Degraded, 350, 98.2),
        entry("4", "User Prompt Service", ServiceStatus::Healthy, 80, 99.8),
    ]
}

/// Sample dashboard counters.
///
/// These are independent of the sample collections above (for instance,
/// eight enablers are counted although no enabler records are seeded).
pub fn sample_dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_capabilities: 5,
        implemented_capabilities: 1,
        total_enablers: 8,
        implemented_enablers: 3,
        total_stories: 10,
        completed_stories: 4,
        service_health: 85.0,
    }
}

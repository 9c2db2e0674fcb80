//! System health page

use crate::error::ViewResult;
use eslm_shared_state::AppContext;
use eslm_types::ServiceHealth;
use serde::Serialize;

/// Enabler services listed under the SLM section, always reported healthy.
pub const SLM_ENABLER_SERVICES: [&str; 8] = [
    "Environment Setup Service",
    "TAD Service",
    "TDC Service",
    "Transformer Service",
    "Data Collection Services",
    "SLM Trainer",
    "DELM Engine",
    "Fine Tuning Service",
];

/// Colour band of the overall health bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Good,
    Warning,
    Critical,
}

impl HealthBand {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            80..=u8::MAX => HealthBand::Good,
            50..=79 => HealthBand::Warning,
            _ => HealthBand::Critical,
        }
    }
}

/// Percentage of services reporting healthy, rounded to the nearest whole
/// number. An empty list is 0.
pub fn overall_health(services: &[ServiceHealth]) -> u8 {
    if services.is_empty() {
        return 0;
    }
    let healthy = services.iter().filter(|s| s.is_healthy()).count();
    (healthy as f64 / services.len() as f64 * 100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthModel {
    pub overall: u8,
    pub band: HealthBand,
    pub services: Vec<ServiceHealth>,
    pub enabler_services: Vec<&'static str>,
}

impl HealthModel {
    pub fn build(ctx: &AppContext) -> ViewResult<Self> {
        let services = ctx.app()?.service_health().to_vec();
        let overall = overall_health(&services);
        Ok(Self {
            overall,
            band: HealthBand::for_percent(overall),
            services,
            enabler_services: SLM_ENABLER_SERVICES.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eslm_shared_state::AppProvider;
    use eslm_types::ServiceStatus;

    fn service(status: ServiceStatus) -> ServiceHealth {
        ServiceHealth {
            id: "x".into(),
            name: "svc".into(),
            status,
            last_check: Utc::now(),
            response_time: 10,
            uptime: 99.0,
        }
    }

    #[test]
    fn seeded_health_is_seventy_five_percent() {
        let provider = AppProvider::new();
        let model = HealthModel::build(&provider.context()).unwrap();

        assert_eq!(model.overall, 75);
        assert_eq!(model.band, HealthBand::Warning);
        assert_eq!(model.services.len(), 4);
        assert_eq!(model.enabler_services.len(), 8);
    }

    #[test]
    fn empty_service_list_is_zero() {
        assert_eq!(overall_health(&[]), 0);
        let provider = AppProvider::empty();
        let model = HealthModel::build(&provider.context()).unwrap();
        assert_eq!(model.overall, 0);
        assert_eq!(model.band, HealthBand::Critical);
    }

    #[test]
    fn rounding_matches_whole_percent() {
        let services = vec![
            service(ServiceStatus::Healthy),
            service(ServiceStatus::Healthy),
            service(ServiceStatus::Unhealthy),
        ];
        assert_eq!(overall_health(&services), 67);

        let services = vec![
            service(ServiceStatus::Healthy),
            service(ServiceStatus::Degraded),
            service(ServiceStatus::Degraded),
        ];
        assert_eq!(overall_health(&services), 33);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(HealthBand::for_percent(100), HealthBand::Good);
        assert_eq!(HealthBand::for_percent(80), HealthBand::Good);
        assert_eq!(HealthBand::for_percent(79), HealthBand::Warning);
        assert_eq!(HealthBand::for_percent(50), HealthBand::Warning);
        assert_eq!(HealthBand::for_percent(49), HealthBand::Critical);
    }
}

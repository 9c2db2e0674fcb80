//! Loading state from a remote source
//!
//! The seeded provider never calls this; it is the path a real backend would
//! use. A failed load leaves the existing slices untouched and records the
//! message in the store's error slot.

use crate::error::{StateError, StateResult};
use crate::store::AppStore;
use async_trait::async_trait;
use eslm_client::EslmClient;
use eslm_types::{Capability, DashboardStats, Enabler, ServiceHealth, Story};
use tracing::{info, warn};

/// Every collection the store holds, fetched in one go.
#[derive(Debug, Clone)]
pub struct RemoteSnapshot {
    pub capabilities: Vec<Capability>,
    pub enablers: Vec<Enabler>,
    pub stories: Vec<Story>,
    pub service_health: Vec<ServiceHealth>,
    pub dashboard_stats: DashboardStats,
}

/// Source of a full state snapshot.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> StateResult<RemoteSnapshot>;
}

#[async_trait]
impl SnapshotSource for EslmClient {
    async fn fetch_snapshot(&self) -> StateResult<RemoteSnapshot> {
        let (capabilities, enablers, stories, service_health, dashboard_stats) = tokio::try_join!(
            self.list_capabilities(),
            self.list_enablers(),
            self.list_stories(),
            self.service_health(),
            self.dashboard_stats(),
        )
        .map_err(|e| StateError::Source(e.to_string()))?;

        Ok(RemoteSnapshot {
            capabilities,
            enablers,
            stories,
            service_health,
            dashboard_stats,
        })
    }
}

/// Replace every slice of `store` with a snapshot from `source`.
///
/// `is_loading` stays true until the slices and the error slot have been
/// written. On success the error slot is cleared; on failure it holds the
/// error message.
pub async fn hydrate<S: SnapshotSource + ?Sized>(store: &AppStore, source: &S) -> StateResult<()> {
    store.set_loading(true);
    let result = source.fetch_snapshot().await;

    let outcome = match result {
        Ok(snapshot) => {
            info!(
                capabilities = snapshot.capabilities.len(),
                enablers = snapshot.enablers.len(),
                stories = snapshot.stories.len(),
                services = snapshot.service_health.len(),
                "Hydrated application state from remote source"
            );
            store.set_capabilities(snapshot.capabilities);
            store.set_enablers(snapshot.enablers);
            store.set_stories(snapshot.stories);
            store.set_service_health(snapshot.service_health);
            store.set_dashboard_stats(snapshot.dashboard_stats);
            store.set_error(None);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Failed to hydrate application state");
            store.set_error(Some(e.to_string()));
            Err(e)
        }
    };

    store.set_loading(false);
    outcome
}

//! The application state store
//!
//! Each slice sits behind its own lock and is replaced wholesale by its
//! setter. Getters hand out `Arc` snapshots, so a reader keeps a consistent
//! view even if a writer replaces the slice immediately afterwards.

use eslm_types::{
    AiGovernance, Capability, DashboardStats, Enabler, GovernanceKey, ServiceHealth, Story,
};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Channel capacity for state change notifications
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Slice that a setter just replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    Capabilities,
    Enablers,
    Stories,
    ServiceHealth,
    DashboardStats,
    AiGovernance,
    Loading,
    Error,
}

/// Current snapshot of every record collection plus loading/error flags.
pub struct AppStore {
    capabilities: RwLock<Arc<[Capability]>>,
    enablers: RwLock<Arc<[Enabler]>>,
    stories: RwLock<Arc<[Story]>>,
    service_health: RwLock<Arc<[ServiceHealth]>>,
    dashboard_stats: RwLock<Option<DashboardStats>>,
    ai_governance: RwLock<AiGovernance>,
    is_loading: AtomicBool,
    error: RwLock<Option<String>>,
    changes: broadcast::Sender<StateChange>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("capabilities", &self.capabilities.read().len())
            .field("enablers", &self.enablers.read().len())
            .field("stories", &self.stories.read().len())
            .field("service_health", &self.service_health.read().len())
            .field("is_loading", &self.is_loading())
            .finish()
    }
}

impl AppStore {
    /// Create an empty store with default governance and no stats.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            capabilities: RwLock::new(Arc::from(Vec::new())),
            enablers: RwLock::new(Arc::from(Vec::new())),
            stories: RwLock::new(Arc::from(Vec::new())),
            service_health: RwLock::new(Arc::from(Vec::new())),
            dashboard_stats: RwLock::new(None),
            ai_governance: RwLock::new(AiGovernance::default()),
            is_loading: AtomicBool::new(false),
            error: RwLock::new(None),
            changes,
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    fn notify(&self, change: StateChange) {
        debug!(?change, "State slice replaced");
        // No subscribers is fine
        let _ = self.changes.send(change);
    }

    // ========== Getters ==========

    pub fn capabilities(&self) -> Arc<[Capability]> {
        self.capabilities.read().clone()
    }

    pub fn enablers(&self) -> Arc<[Enabler]> {
        self.enablers.read().clone()
    }

    pub fn stories(&self) -> Arc<[Story]> {
        self.stories.read().clone()
    }

    pub fn service_health(&self) -> Arc<[ServiceHealth]> {
        self.service_health.read().clone()
    }

    pub fn dashboard_stats(&self) -> Option<DashboardStats> {
        *self.dashboard_stats.read()
    }

    pub fn ai_governance(&self) -> AiGovernance {
        *self.ai_governance.read()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    /// Look up a capability by id in the current snapshot.
    pub fn capability(&self, id: &str) -> Option<Capability> {
        self.capabilities.read().iter().find(|c| c.id == id).cloned()
    }

    // ========== Setters ==========

    pub fn set_capabilities(&self, capabilities: Vec<Capability>) {
        *self.capabilities.write() = Arc::from(capabilities);
        self.notify(StateChange::Capabilities);
    }

    pub fn set_enablers(&self, enablers: Vec<Enabler>) {
        *self.enablers.write() = Arc::from(enablers);
        self.notify(StateChange::Enablers);
    }

    pub fn set_stories(&self, stories: Vec<Story>) {
        *self.stories.write() = Arc::from(stories);
        self.notify(StateChange::Stories);
    }

    pub fn set_service_health(&self, health: Vec<ServiceHealth>) {
        *self.service_health.write() = Arc::from(health);
        self.notify(StateChange::ServiceHealth);
    }

    pub fn set_dashboard_stats(&self, stats: DashboardStats) {
        *self.dashboard_stats.write() = Some(stats);
        self.notify(StateChange::DashboardStats);
    }

    pub fn set_ai_governance(&self, governance: AiGovernance) {
        *self.ai_governance.write() = governance;
        self.notify(StateChange::AiGovernance);
    }

    pub fn set_loading(&self, loading: bool) {
        self.is_loading.store(loading, Ordering::SeqCst);
        self.notify(StateChange::Loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.write() = error;
        self.notify(StateChange::Error);
    }

    /// Flip one governance flag and return the resulting record.
    ///
    /// [`GovernanceKey::PresetLevel`] leaves the record untouched and emits
    /// no change notification.
    pub fn toggle_governance(&self, key: GovernanceKey) -> AiGovernance {
        if key == GovernanceKey::PresetLevel {
            return self.ai_governance();
        }

        let next = {
            let mut guard = self.ai_governance.write();
            *guard = guard.toggle(key);
            *guard
        };
        debug!(%key, value = ?next.flag(key), "Governance flag toggled");
        self.notify(StateChange::AiGovernance);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn new_store_is_empty() {
        let store = AppStore::new();
        assert!(store.capabilities().is_empty());
        assert!(store.dashboard_stats().is_none());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.ai_governance(), AiGovernance::default());
    }

    #[test]
    fn setters_replace_whole_slice() {
        let store = AppStore::new();
        store.set_capabilities(seed::sample_capabilities());
        assert_eq!(store.capabilities().len(), 5);

        let one = vec![store.capabilities()[0].clone()];
        store.set_capabilities(one);
        assert_eq!(store.capabilities().len(), 1);
    }

    #[test]
    fn snapshot_survives_later_writes() {
        let store = AppStore::new();
        store.set_capabilities(seed::sample_capabilities());

        let before = store.capabilities();
        store.set_capabilities(Vec::new());

        assert_eq!(before.len(), 5);
        assert!(store.capabilities().is_empty());
    }

    #[test]
    fn setters_emit_change_notifications() {
        let store = AppStore::new();
        let mut rx = store.subscribe();

        store.set_loading(true);
        store.set_error(Some("boom".into()));

        assert_eq!(rx.try_recv().unwrap(), StateChange::Loading);
        assert_eq!(rx.try_recv().unwrap(), StateChange::Error);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn toggle_flips_one_flag_and_notifies() {
        let store = AppStore::new();
        let mut rx = store.subscribe();

        let next = store.toggle_governance(GovernanceKey::SecurityCompliance);
        assert!(!next.security_compliance);
        assert!(next.workflow_compliance);
        assert_eq!(store.ai_governance(), next);
        assert_eq!(rx.try_recv().unwrap(), StateChange::AiGovernance);
    }

    #[test]
    fn toggle_preset_level_changes_nothing() {
        let store = AppStore::new();
        let mut rx = store.subscribe();
        let before = store.ai_governance();

        let after = store.toggle_governance(GovernanceKey::PresetLevel);

        assert_eq!(before, after);
        assert_eq!(store.ai_governance(), before);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn capability_lookup_by_id() {
        let store = AppStore::new();
        store.set_capabilities(seed::sample_capabilities());
        assert_eq!(store.capability("CAP-011").unwrap().name, "Output Delivery System");
        assert!(store.capability("CAP-999").is_none());
    }

    proptest! {
        #[test]
        fn capability_setter_replaces_only_its_slice(
            picks in proptest::collection::vec((0usize..16, "[A-Z]{3}-[0-9]{3}"), 0..12)
        ) {
            let store = AppStore::new();
            store.set_dashboard_stats(seed::sample_dashboard_stats());
            store.set_capabilities(seed::sample_capabilities());

            let sample = seed::sample_capabilities();
            let next: Vec<Capability> = picks
                .iter()
                .map(|(index, id)| {
                    let mut capability = sample[index % sample.len()].clone();
                    capability.id = id.clone();
                    capability
                })
                .collect();
            store.set_capabilities(next.clone());

            prop_assert_eq!(&store.capabilities()[..], &next[..]);
            prop_assert_eq!(store.dashboard_stats(), Some(seed::sample_dashboard_stats()));
            prop_assert!(store.enablers().is_empty());
            prop_assert_eq!(store.error(), None);
        }
    }
}

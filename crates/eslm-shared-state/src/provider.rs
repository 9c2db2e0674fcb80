//! Provider and context handles
//!
//! The provider owns the store for one session. Views receive an
//! [`AppContext`], which only holds a weak reference: once the provider is
//! dropped every access through a context fails with
//! [`StateError::OutsideProvider`].

use crate::error::{StateError, StateResult};
use crate::seed;
use crate::store::AppStore;
use chrono::Utc;
use std::sync::{Arc, Weak};
use tracing::{info, warn};

/// Owner of the application state for one session.
#[derive(Debug)]
pub struct AppProvider {
    store: Arc<AppStore>,
}

impl Default for AppProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AppProvider {
    /// Create a provider and seed it with the sample records.
    ///
    /// Capabilities, service health and dashboard stats are seeded; enablers
    /// and stories start empty.
    pub fn new() -> Self {
        let provider = Self::empty();
        provider.seed();
        provider
    }

    /// Create a provider with an empty store (no sample data).
    pub fn empty() -> Self {
        Self {
            store: Arc::new(AppStore::new()),
        }
    }

    fn seed(&self) {
        let capabilities = seed::sample_capabilities();
        let health = seed::sample_service_health(Utc::now());
        info!(
            capabilities = capabilities.len(),
            services = health.len(),
            "Seeding application state with sample data"
        );

        self.store.set_capabilities(capabilities);
        self.store.set_service_health(health);
        self.store.set_dashboard_stats(seed::sample_dashboard_stats());
    }

    /// Hand out a context for a view.
    pub fn context(&self) -> AppContext {
        AppContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Direct access to the store while the provider is held.
    pub fn store(&self) -> &Arc<AppStore> {
        &self.store
    }
}

/// Handle through which views read and write application state.
#[derive(Debug, Clone)]
pub struct AppContext {
    store: Weak<AppStore>,
}

impl AppContext {
    /// A context that was never attached to a provider.
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    /// Resolve the store, failing when no provider is alive.
    pub fn app(&self) -> StateResult<Arc<AppStore>> {
        self.store.upgrade().ok_or_else(|| {
            warn!("Application state accessed outside of a provider");
            StateError::OutsideProvider
        })
    }

    /// Whether a provider currently backs this context.
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }
}

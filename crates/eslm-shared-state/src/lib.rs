//! ESLM Shared State - Session-scoped application state container
//!
//! This crate holds the current snapshot of every record the dashboard shows:
//!
//! - **AppProvider**: owns the store for one session and seeds it with sample data
//! - **AppContext**: cheap handle passed to views; fails once the provider is gone
//! - **AppStore**: per-slice getters returning shared snapshots and setters that
//!   replace a slice wholesale, with change notifications for re-rendering
//! - **References**: explicit name lookups that report dangling names
//!
//! Records live in memory for the lifetime of the provider and are never persisted.

#![deny(unsafe_code)]

pub mod error;
pub mod hydrate;
pub mod provider;
pub mod references;
pub mod seed;
pub mod store;

// Re-exports
pub use error::{StateError, StateResult};
pub use hydrate::{hydrate, RemoteSnapshot, SnapshotSource};
pub use provider::{AppContext, AppProvider};
pub use references::{DanglingReference, Reference, ReferenceField};
pub use store::{AppStore, StateChange};

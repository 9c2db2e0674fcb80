//! Name-based cross-reference resolution
//!
//! Capabilities point at enablers and at other capabilities by name. These
//! lookups resolve each name against the current snapshot and keep the
//! unresolved ones visible instead of dropping them.

use crate::store::AppStore;
use eslm_types::{Capability, Enabler};
use tracing::debug;

/// Outcome of resolving one name.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<T> {
    Resolved(T),
    Unresolved(String),
}

impl<T> Reference<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(value) => Some(value),
            Reference::Unresolved(_) => None,
        }
    }
}

/// Which name list a reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceField {
    Enablers,
    UpstreamDependencies,
    DownstreamImpacts,
    ParentCapability,
}

impl ReferenceField {
    /// Wire name of the field.
    pub fn field_name(&self) -> &'static str {
        match self {
            ReferenceField::Enablers => "enablers",
            ReferenceField::UpstreamDependencies => "upstreamDependencies",
            ReferenceField::DownstreamImpacts => "downstreamImpacts",
            ReferenceField::ParentCapability => "parentCapability",
        }
    }
}

/// A name that matched no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Id of the record holding the name
    pub owner_id: String,
    pub field: ReferenceField,
    pub name: String,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} -> '{}' (unresolved)",
            self.owner_id,
            self.field.field_name(),
            self.name
        )
    }
}

fn resolve<T: Clone>(
    names: &[String],
    pool: &[T],
    name_of: impl Fn(&T) -> &str,
) -> Vec<Reference<T>> {
    names
        .iter()
        .map(|name| match pool.iter().find(|item| name_of(item) == name) {
            Some(item) => Reference::Resolved(item.clone()),
            None => Reference::Unresolved(name.clone()),
        })
        .collect()
}

impl AppStore {
    /// Resolve a capability's enabler names against the enabler collection.
    pub fn resolve_enablers(&self, capability: &Capability) -> Vec<Reference<Enabler>> {
        resolve(&capability.enablers, &self.enablers(), |e| e.name.as_str())
    }

    /// Resolve upstream dependency names against the capability collection.
    pub fn resolve_upstream(&self, capability: &Capability) -> Vec<Reference<Capability>> {
        resolve(&capability.upstream_dependencies, &self.capabilities(), |c| c.name.as_str())
    }

    /// Resolve downstream impact names against the capability collection.
    pub fn resolve_downstream(&self, capability: &Capability) -> Vec<Reference<Capability>> {
        resolve(&capability.downstream_impacts, &self.capabilities(), |c| c.name.as_str())
    }

    /// Resolve an enabler's parent capability by name.
    pub fn resolve_parent(&self, enabler: &Enabler) -> Reference<Capability> {
        let capabilities = self.capabilities();
        match capabilities.iter().find(|c| c.name == enabler.parent_capability) {
            Some(parent) => Reference::Resolved(parent.clone()),
            None => Reference::Unresolved(enabler.parent_capability.clone()),
        }
    }

    /// Every name in the current snapshot that matches no record.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for cap in self.capabilities().iter() {
            let mut record = |field: ReferenceField, names: Vec<Option<String>>| {
                for name in names.into_iter().flatten() {
                    dangling.push(DanglingReference {
                        owner_id: cap.id.clone(),
                        field,
                        name,
                    });
                }
            };

            record(
                ReferenceField::Enablers,
                self.resolve_enablers(cap).into_iter().map(unresolved_name).collect(),
            );
            record(
                ReferenceField::UpstreamDependencies,
                self.resolve_upstream(cap).into_iter().map(unresolved_name).collect(),
            );
            record(
                ReferenceField::DownstreamImpacts,
                self.resolve_downstream(cap).into_iter().map(unresolved_name).collect(),
            );
        }

        for enabler in self.enablers().iter() {
            if let Reference::Unresolved(name) = self.resolve_parent(enabler) {
                dangling.push(DanglingReference {
                    owner_id: enabler.id.clone(),
                    field: ReferenceField::ParentCapability,
                    name,
                });
            }
        }

        debug!(count = dangling.len(), "Collected dangling references");
        dangling
    }
}

fn unresolved_name<T>(reference: Reference<T>) -> Option<String> {
    match reference {
        Reference::Resolved(_) => None,
        Reference::Unresolved(name) => Some(name),
    }
}

//! Capability browser: search, list cards, and a detail panel

use crate::error::ViewResult;
use eslm_shared_state::AppContext;
use eslm_types::{Capability, Status};
use serde::Serialize;

/// Enabler chips shown on a list card before collapsing into "+N more".
pub const MAX_ENABLER_CHIPS: usize = 3;

/// Text shown in the detail panel when nothing is selected.
pub const DETAIL_PLACEHOLDER: &str = "Select a capability to view details";

/// One entry of the capability list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityCard {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub description: String,
    pub enabler_chips: Vec<String>,
    /// Enablers beyond the visible chips.
    pub more_enablers: usize,
    pub selected: bool,
}

impl CapabilityCard {
    fn new(capability: &Capability, selected: bool) -> Self {
        let visible = capability.enablers.len().min(MAX_ENABLER_CHIPS);
        Self {
            id: capability.id.clone(),
            name: capability.name.clone(),
            status: capability.status(),
            description: capability.description.clone(),
            enabler_chips: capability.enablers[..visible].to_vec(),
            more_enablers: capability.enablers.len() - visible,
            selected,
        }
    }

    /// The overflow chip label, if any enablers were hidden.
    pub fn more_label(&self) -> Option<String> {
        (self.more_enablers > 0).then(|| format!("+{} more", self.more_enablers))
    }
}

/// Contents of the right-hand panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPanel {
    Placeholder { message: &'static str },
    Details {
        name: String,
        id: String,
        status: Status,
        enablers: Vec<String>,
        /// Omitted by renderers when empty.
        upstream_dependencies: Vec<String>,
        /// Omitted by renderers when empty.
        downstream_impacts: Vec<String>,
        implementation_notes: String,
    },
}

/// Local state of the capabilities page.
///
/// The selection is a copy taken at click time; it does not follow later
/// changes to the store.
#[derive(Debug, Clone, Default)]
pub struct CapabilitiesView {
    search_term: String,
    selected: Option<Capability>,
}

impl CapabilitiesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Capabilities whose id or name contains the search term, ignoring case.
    /// Store order is preserved.
    pub fn filtered(&self, ctx: &AppContext) -> ViewResult<Vec<Capability>> {
        let app = ctx.app()?;
        Ok(app
            .capabilities()
            .iter()
            .filter(|c| c.matches(&self.search_term))
            .cloned()
            .collect())
    }

    pub fn cards(&self, ctx: &AppContext) -> ViewResult<Vec<CapabilityCard>> {
        let selected_id = self.selected.as_ref().map(|c| c.id.as_str());
        Ok(self
            .filtered(ctx)?
            .iter()
            .map(|c| CapabilityCard::new(c, selected_id == Some(c.id.as_str())))
            .collect())
    }

    /// Select a capability by id. Returns false when no such capability
    /// exists, leaving the previous selection in place.
    pub fn select(&mut self, ctx: &AppContext, id: &str) -> ViewResult<bool> {
        match ctx.app()?.capability(id) {
            Some(capability) => {
                self.selected = Some(capability);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Capability> {
        self.selected.as_ref()
    }

    pub fn detail_panel(&self) -> DetailPanel {
        match &self.selected {
            None => DetailPanel::Placeholder {
                message: DETAIL_PLACEHOLDER,
            },
            Some(c) => DetailPanel::Details {
                name: c.name.clone(),
                id: c.id.clone(),
                status: c.status(),
                enablers: c.enablers.clone(),
                upstream_dependencies: c.upstream_dependencies.clone(),
                downstream_impacts: c.downstream_impacts.clone(),
                implementation_notes: c.implementation_notes.clone(),
            },
        }
    }
}

//! Capability commands

use super::CapabilityRow;
use crate::error::{CliError, CliResult};
use crate::output::{
    badge, print_heading, print_output, print_structured, print_success, print_warning,
    OutputFormat,
};
use crate::session::Session;
use clap::Subcommand;
use colored::*;
use eslm_shared_state::Reference;
use eslm_types::{Capability, CapabilityDraft, FlowVisualization};
use eslm_views::{CapabilitiesView, CapabilityCard, DetailPanel};
use serde::Serialize;
use tabled::Tabled;

/// Capability subcommands
#[derive(Subcommand)]
pub enum CapabilityCommands {
    /// List capabilities
    List {
        /// Case-insensitive filter on id or name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show capability details
    Show {
        /// Capability ID
        id: String,
    },

    /// Show the dependency flow between capabilities
    Flow,

    /// List names that match no known record
    References,

    /// Create a capability on the backend
    Create {
        /// Capability name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Enabler names (repeatable)
        #[arg(long = "enabler")]
        enablers: Vec<String>,
    },
}

/// Execute a capability command
pub async fn execute(
    command: CapabilityCommands,
    session: &Session,
    format: OutputFormat,
) -> CliResult<()> {
    let ctx = session.context();

    match command {
        CapabilityCommands::List { search } => {
            let mut view = CapabilitiesView::new();
            if let Some(term) = search {
                view.set_search(term);
            }
            let cards = view.cards(&ctx)?;
            if print_structured(&cards, format)? {
                return Ok(());
            }
            print_output(cards.iter().map(card_row).collect(), format)
        }

        CapabilityCommands::Show { id } => {
            let mut view = CapabilitiesView::new();
            if !view.select(&ctx, &id)? {
                return Err(CliError::NotFound(format!("capability {}", id)));
            }
            let panel = view.detail_panel();
            if print_structured(&panel, format)? {
                return Ok(());
            }
            if let Some(capability) = view.selected() {
                print_details(&panel, capability, session)?;
            }
            Ok(())
        }

        CapabilityCommands::Flow => {
            let flow = FlowVisualization::from_capabilities(&ctx.app()?.capabilities());
            if print_structured(&flow, format)? {
                return Ok(());
            }
            let rows: Vec<EdgeRow> = flow
                .edges
                .iter()
                .map(|e| EdgeRow {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    kind: format!("{:?}", e.kind).to_lowercase(),
                })
                .collect();
            print_output(rows, format)
        }

        CapabilityCommands::References => {
            let dangling = ctx.app()?.dangling_references();
            let rows: Vec<ReferenceRow> = dangling
                .iter()
                .map(|d| ReferenceRow {
                    owner: d.owner_id.clone(),
                    field: d.field.field_name(),
                    name: d.name.clone(),
                })
                .collect();
            if format == OutputFormat::Table && !rows.is_empty() {
                print_warning(&format!("{} unresolved references", rows.len()));
            }
            print_output(rows, format)
        }

        CapabilityCommands::Create {
            name,
            description,
            enablers,
        } => {
            let draft = CapabilityDraft {
                name: Some(name),
                description,
                enablers: (!enablers.is_empty()).then_some(enablers),
                ..Default::default()
            };
            let created = session.client().create_capability(&draft).await?;
            if !print_structured(&created, format)? {
                print_success(&format!("Created capability {} ({})", created.id, created.name));
            }
            Ok(())
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct EdgeRow {
    #[tabled(rename = "FROM")]
    source: String,
    #[tabled(rename = "TO")]
    target: String,
    #[tabled(rename = "KIND")]
    kind: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ReferenceRow {
    #[tabled(rename = "OWNER")]
    owner: String,
    #[tabled(rename = "FIELD")]
    field: &'static str,
    #[tabled(rename = "NAME")]
    name: String,
}

fn card_row(card: &CapabilityCard) -> CapabilityRow {
    let mut chips = card.enabler_chips.join(", ");
    if let Some(more) = card.more_label() {
        chips.push(' ');
        chips.push_str(&more);
    }
    CapabilityRow::new(&card.id, &card.name, card.status.label(), chips)
}

fn print_details(panel: &DetailPanel, capability: &Capability, session: &Session) -> CliResult<()> {
    let DetailPanel::Details {
        name,
        id,
        status,
        enablers,
        upstream_dependencies,
        downstream_impacts,
        implementation_notes,
    } = panel
    else {
        return Ok(());
    };

    print_heading("Capability Details");
    println!("Name:   {}", name.bold());
    println!("ID:     {}", id);
    println!("Status: {}", badge(status.label()));

    let app = session.context().app()?;
    if !enablers.is_empty() {
        println!("\nEnablers:");
        print_references(&app.resolve_enablers(capability), |e| (e.name.as_str(), e.id.as_str()));
    }
    if !upstream_dependencies.is_empty() {
        println!("\nUpstream Dependencies:");
        print_references(&app.resolve_upstream(capability), |c| (c.name.as_str(), c.id.as_str()));
    }
    if !downstream_impacts.is_empty() {
        println!("\nDownstream Impacts:");
        print_references(&app.resolve_downstream(capability), |c| (c.name.as_str(), c.id.as_str()));
    }

    println!("\nImplementation Notes:");
    println!("  {}", implementation_notes);
    Ok(())
}

fn print_references<T>(references: &[Reference<T>], label: impl Fn(&T) -> (&str, &str)) {
    for reference in references {
        match reference {
            Reference::Resolved(item) => {
                let (name, id) = label(item);
                println!("  - {} ({})", name, id.dimmed());
            }
            Reference::Unresolved(name) => println!("  - {} {}", name, "(unresolved)".dimmed()),
        }
    }
}

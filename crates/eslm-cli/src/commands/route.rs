//! Route navigation commands

use super::{dashboard, governance, health, prompts, settings, stories};
use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};
use crate::session::Session;
use eslm_views::Route;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    #[tabled(rename = "PATH")]
    path: &'static str,
    #[tabled(rename = "PAGE")]
    label: &'static str,
}

/// List every route in navigation order
pub fn list(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<RouteRow> = Route::ALL
        .iter()
        .map(|r| RouteRow {
            path: r.path(),
            label: r.label(),
        })
        .collect();
    print_output(rows, format)
}

/// Render the page a path resolves to. Unknown paths show the dashboard.
pub async fn open(path: &str, session: &Session, format: OutputFormat) -> CliResult<()> {
    let route = Route::parse(path);
    debug!(path, route = route.label(), "Resolved route");

    match route {
        Route::Dashboard => dashboard::execute(session, format),
        Route::Capabilities => {
            super::capabilities::execute(
                super::capabilities::CapabilityCommands::List { search: None },
                session,
                format,
            )
            .await
        }
        Route::SlmEngine => {
            super::slm::execute(super::slm::SlmCommands::Config, session, format).await
        }
        Route::Prompts => prompts::execute(session, format).await,
        Route::Health => health::execute(session, format),
        Route::Stories => stories::execute(format),
        Route::Governance => governance::execute(None, session, format),
        Route::Settings => settings::execute(session, format).await,
    }
}

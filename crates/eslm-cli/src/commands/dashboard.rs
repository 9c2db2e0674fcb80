//! Dashboard command

use super::{CapabilityRow, ServiceRow};
use crate::error::CliResult;
use crate::output::{print_heading, print_output, print_structured, OutputFormat};
use crate::session::Session;
use colored::*;
use eslm_views::DashboardModel;

pub fn execute(session: &Session, format: OutputFormat) -> CliResult<()> {
    let model = DashboardModel::build(&session.context())?;
    if print_structured(&model, format)? {
        return Ok(());
    }

    match model {
        DashboardModel::Loading => println!("{}", "Loading...".dimmed()),
        DashboardModel::Ready {
            cards,
            recent_capabilities,
            services,
        } => {
            print_heading("Dashboard");
            for card in &cards {
                println!("  {:<16} {}", card.title, card.value.bold());
            }

            println!();
            print_heading("Recent Capabilities");
            print_output(
                recent_capabilities.iter().map(CapabilityRow::from).collect(),
                format,
            )?;

            println!();
            print_heading("Service Status");
            print_output(services.iter().map(ServiceRow::from).collect(), format)?;
        }
    }
    Ok(())
}

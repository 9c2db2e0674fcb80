//! Health command

use super::ServiceRow;
use crate::error::CliResult;
use crate::output::{badge, print_heading, print_output, print_structured, OutputFormat};
use crate::session::Session;
use colored::*;
use eslm_views::{HealthBand, HealthModel};

pub fn execute(session: &Session, format: OutputFormat) -> CliResult<()> {
    let model = HealthModel::build(&session.context())?;
    if print_structured(&model, format)? {
        return Ok(());
    }

    let overall = format!("{}%", model.overall);
    let overall = match model.band {
        HealthBand::Good => overall.green(),
        HealthBand::Warning => overall.yellow(),
        HealthBand::Critical => overall.red(),
    };
    println!("Overall System Health: {}", overall.bold());
    println!();

    print_heading("Service Status");
    print_output(model.services.iter().map(ServiceRow::from).collect(), format)?;

    println!();
    print_heading("SLM Enabler Services");
    for service in &model.enabler_services {
        println!("  {:<28} {}", service, badge("healthy"));
    }
    Ok(())
}

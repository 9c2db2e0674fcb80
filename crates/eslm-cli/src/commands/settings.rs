//! Settings command

use crate::error::CliResult;
use crate::output::{print_heading, print_structured, OutputFormat};
use crate::session::Session;
use colored::*;
use eslm_types::SlmConfig;
use eslm_views::SettingsModel;

pub async fn execute(session: &Session, format: OutputFormat) -> CliResult<()> {
    let slm = if session.is_remote() {
        session.client().slm_config().await?
    } else {
        SlmConfig::default()
    };
    let model = SettingsModel::build(slm);
    if print_structured(&model, format)? {
        return Ok(());
    }

    print_heading("SLM Configuration");
    println!("  Model Name:  {}", model.slm.model_name);
    println!("  Version:     {}", model.slm.version);
    println!("  Temperature: {}", model.slm.temperature);
    println!("  Max Tokens:  {}", model.slm.max_tokens);

    println!();
    print_heading("System Settings");
    for toggle in &model.toggles {
        let state = if toggle.enabled { "on".green() } else { "off".dimmed() };
        println!("  {:<18} {:<4} {}", toggle.title, state, toggle.description.dimmed());
    }

    println!();
    print_heading("Workspace Information");
    println!("  Workspace:  {}", model.workspace.workspace);
    println!("  Project:    {}", model.workspace.project);
    println!("  Governance: {}", model.workspace.governance);
    println!("  Version:    {}", model.workspace.version);
    Ok(())
}

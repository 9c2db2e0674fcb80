//! Governance commands

use crate::error::{CliError, CliResult};
use crate::output::{print_heading, print_structured, OutputFormat};
use crate::session::Session;
use clap::Subcommand;
use colored::*;
use eslm_types::GovernanceKey;
use eslm_views::governance::GUIDED_POLICY_RULES;
use eslm_views::GovernanceModel;

/// Governance subcommands
#[derive(Subcommand)]
pub enum GovernanceCommands {
    /// Show the current governance controls
    Show,

    /// Flip one compliance control, e.g. `quality-gates`
    Toggle {
        /// Control to flip
        key: String,
    },
}

/// Execute a governance command. Defaults to `show`.
pub fn execute(
    command: Option<GovernanceCommands>,
    session: &Session,
    format: OutputFormat,
) -> CliResult<()> {
    let ctx = session.context();
    let model = match command.unwrap_or(GovernanceCommands::Show) {
        GovernanceCommands::Show => GovernanceModel::build(&ctx)?,
        GovernanceCommands::Toggle { key } => {
            let key: GovernanceKey = key.parse().map_err(CliError::InvalidInput)?;
            GovernanceModel::toggle(&ctx, key)?
        }
    };

    if print_structured(&model, format)? {
        return Ok(());
    }

    print_heading(&format!("AI Governance - Preset {}", model.preset_level.level()));
    println!("{}", model.preset_description);
    println!();

    for control in &model.controls {
        let state = if control.enabled {
            control.state_label().green()
        } else {
            control.state_label().dimmed()
        };
        println!("  {:<26} {}", control.title.bold(), state);
        println!("  {}", control.description.dimmed());
    }

    println!();
    print_heading("Preset 2 Policy Summary");
    for rule in GUIDED_POLICY_RULES {
        println!("  - {}", rule);
    }
    Ok(())
}

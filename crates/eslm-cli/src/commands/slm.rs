//! SLM engine commands

use crate::error::{CliError, CliResult};
use crate::output::{badge, print_info, print_structured, print_success, print_warning, OutputFormat};
use crate::session::Session;
use clap::Subcommand;
use colored::*;
use eslm_engine::EngineConfig;
use eslm_types::{SlmConfig, SlmConfigUpdate};
use eslm_views::{SlmEngineView, MODEL_INFO};
use std::time::Duration;
use tracing::info;

/// SLM subcommands
#[derive(Subcommand)]
pub enum SlmCommands {
    /// Generate a UI component from a description
    Generate {
        /// Description of the component
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Override the simulated generation delay
        #[arg(long = "delay-ms", value_parser = crate::parse_millis)]
        delay: Option<Duration>,
    },

    /// Show model configuration
    Config,

    /// Change model configuration
    Configure {
        #[arg(long)]
        model_name: Option<String>,

        #[arg(long)]
        version: Option<String>,

        /// Sampling temperature (0.0 - 2.0)
        #[arg(long)]
        temperature: Option<f32>,

        #[arg(long)]
        max_tokens: Option<u32>,

        #[arg(long)]
        enabled: Option<bool>,
    },
}

/// Execute an SLM command
pub async fn execute(command: SlmCommands, session: &Session, format: OutputFormat) -> CliResult<()> {
    match command {
        SlmCommands::Generate { prompt, delay } => {
            let prompt = prompt.join(" ");
            if session.is_remote() {
                let submitted = session.client().submit_prompt(&prompt).await?;
                if !print_structured(&submitted, format)? {
                    print_success(&format!(
                        "Prompt {} submitted ({})",
                        submitted.id,
                        badge(submitted.status.label())
                    ));
                }
                return Ok(());
            }

            let mut engine = session.engine_config();
            if let Some(delay) = delay {
                engine.delay = delay;
            }
            generate(&prompt, engine, format).await
        }

        SlmCommands::Config => {
            let config = if session.is_remote() {
                session.client().slm_config().await?
            } else {
                SlmConfig::default()
            };
            print_config(&config, format)
        }

        SlmCommands::Configure {
            model_name,
            version,
            temperature,
            max_tokens,
            enabled,
        } => {
            let update = SlmConfigUpdate {
                model_name,
                version,
                temperature,
                max_tokens,
                enabled,
            };
            if update.is_empty() {
                return Err(CliError::InvalidInput("no configuration fields given".into()));
            }
            update.validate().map_err(CliError::InvalidInput)?;

            let config = if session.is_remote() {
                session.client().update_slm_config(&update).await?
            } else {
                print_info("Not connected to a backend; showing the result locally");
                update.apply(SlmConfig::default())
            };
            print_config(&config, format)
        }
    }
}

async fn generate(prompt: &str, engine: EngineConfig, format: OutputFormat) -> CliResult<()> {
    let mut view = SlmEngineView::new(engine);
    view.set_input(prompt);

    let generation = view
        .submit()?
        .ok_or_else(|| CliError::InvalidInput("prompt is empty".into()))?;
    let id = generation.id();

    if format == OutputFormat::Table {
        println!(
            "{} {} ({}, avg {})",
            "Generating...".dimmed(),
            MODEL_INFO.model,
            MODEL_INFO.status,
            MODEL_INFO.avg_response
        );
    }

    tokio::select! {
        result = generation.wait() => {
            let output = result.map_err(eslm_views::ViewError::from)?;
            if print_structured(&output, format)? {
                return Ok(());
            }
            print_success("UI component generated successfully");
            println!("Prompt: {}", output.prompt.bold());
            println!();
            println!("{}", output.response);
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            view.engine().cancel(id);
            info!(%id, "Generation interrupted");
            print_warning("Generation cancelled");
            Ok(())
        }
    }
}

fn print_config(config: &SlmConfig, format: OutputFormat) -> CliResult<()> {
    if print_structured(config, format)? {
        return Ok(());
    }
    println!("Model Name:  {}", config.model_name);
    println!("Version:     {}", config.version);
    println!("Temperature: {}", config.temperature);
    println!("Max Tokens:  {}", config.max_tokens);
    println!("Enabled:     {}", config.enabled);
    Ok(())
}

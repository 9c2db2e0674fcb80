//! ESLM CLI - Terminal front-end for the UI design SLM dashboard
//!
//! Every page of the dashboard is available as a subcommand:
//! - Dashboard statistics and recent capabilities
//! - Capability search, details and dependency flow
//! - Simulated UI component generation
//! - Service health, governance controls and settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;
mod session;

use commands::{capabilities, governance, slm};
use config::CliConfig;
use eslm_client::{EslmClient, DEFAULT_ENDPOINT};
use error::CliResult;
use output::{print_error, print_success};
use session::Session;

/// ESLM CLI application
#[derive(Parser)]
#[command(name = "eslm")]
#[command(about = "ESLM - UI Design Small Language Model dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ESLM_CONFIG")]
    config: Option<PathBuf>,

    /// Backend endpoint
    #[arg(short, long, env = "ESLM_ENDPOINT")]
    endpoint: Option<String>,

    /// Load state from the backend instead of the built-in sample data
    #[arg(long, env = "ESLM_REMOTE")]
    remote: bool,

    /// Output format (table, json, yaml)
    #[arg(short, long, value_enum, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, env = "ESLM_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Dashboard overview
    Dashboard,

    /// Browse capabilities
    #[command(alias = "caps")]
    Capabilities {
        #[command(subcommand)]
        command: capabilities::CapabilityCommands,
    },

    /// Generate UI components with the SLM engine
    Slm {
        #[command(subcommand)]
        command: slm::SlmCommands,
    },

    /// Prompt history
    Prompts,

    /// Service health
    Health,

    /// User stories
    Stories,

    /// AI governance controls
    Governance {
        #[command(subcommand)]
        command: Option<governance::GovernanceCommands>,
    },

    /// Settings
    Settings,

    /// Render the page behind a route path
    Open {
        /// Route path, e.g. /capabilities
        path: String,
    },

    /// List navigable routes
    Routes,

    /// Show configuration
    Config,

    /// Check backend connectivity
    Status,
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let client = EslmClient::new(&endpoint)?;

    match cli.command {
        Commands::Config => {
            println!("Endpoint: {}", endpoint);
            println!("Remote: {}", cli.remote);
            let engine = config.engine_config();
            println!("Generation delay: {:?}", engine.delay);
            println!("Submission policy: {:?}", engine.policy);
            return Ok(());
        }
        Commands::Status => {
            let stats = client.dashboard_stats().await?;
            print_success(&format!("ESLM backend at {} is reachable", endpoint));
            println!("  Capabilities: {}", stats.total_capabilities);
            println!("  Service health: {}%", stats.service_health);
            return Ok(());
        }
        Commands::Routes => return commands::route::list(cli.output),
        _ => {}
    }

    let session = Session::open(client, config.engine_config(), cli.remote).await?;
    let format = cli.output;

    match cli.command {
        Commands::Dashboard => commands::dashboard::execute(&session, format),
        Commands::Capabilities { command } => {
            capabilities::execute(command, &session, format).await
        }
        Commands::Slm { command } => slm::execute(command, &session, format).await,
        Commands::Prompts => commands::prompts::execute(&session, format).await,
        Commands::Health => commands::health::execute(&session, format),
        Commands::Stories => commands::stories::execute(format),
        Commands::Governance { command } => governance::execute(command, &session, format),
        Commands::Settings => commands::settings::execute(&session, format).await,
        Commands::Open { path } => commands::route::open(&path, &session, format).await,
        Commands::Config | Commands::Status | Commands::Routes => Ok(()),
    }
}

/// Parse a millisecond count from the command line.
pub(crate) fn parse_millis(s: &str) -> Result<Duration, String> {
    s.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| format!("invalid milliseconds '{}': {}", s, e))
}

//! engineyard CLI
//!
//! Command-line client for Engine Yard Cloud: deploys, rebuilds, rollbacks,
//! SSH sessions, logs, recipes, and maintenance pages.

mod commands;
mod config;
mod error;
mod git;
mod resolver;
mod ssh;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use commands::{Commands, handle_command, print_version};
use config::{Context, EyConfig};

#[derive(Parser)]
#[command(name = "engineyard")]
#[command(about = "Engine Yard Cloud CLI", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Cloud API URL
    #[arg(
        long,
        env = "EY_API_URL",
        default_value = "https://cloud.engineyard.com"
    )]
    api_url: String,

    /// Cloud API token
    #[arg(long, env = "EY_API_TOKEN")]
    api_token: Option<String>,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.version {
        print_version();
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let ctx = Context {
        api_url: cli.api_url,
        api_token: cli.api_token,
        config: EyConfig::load(&cwd)?,
        cwd,
    };

    handle_command(command, &ctx).await
}

/// Diagnostics are opt-in via EY_LOG (an env-filter directive) and go to
/// stderr so they never mix with command output.
fn init_tracing() {
    if let Ok(filter) = std::env::var("EY_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }
}

//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod deploy;
mod environments;
mod logs;
mod rebuild;
mod recipes;
mod rollback;
mod ssh;
mod version;
mod web;

pub use recipes::RecipesCommands;
pub use version::print_version;
pub use web::WebCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Context;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Deploy an app to an environment
    Deploy {
        /// App to deploy (inferred from the repository when omitted)
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to deploy to
        #[arg(short, long)]
        environment: Option<String>,

        /// Git ref to deploy (branch, tag, or SHA)
        #[arg(short = 'r', long = "ref")]
        git_ref: Option<String>,

        /// Run migrations after the code push
        #[arg(short, long)]
        migrate: bool,

        /// Migration command to run (implies --migrate)
        #[arg(long)]
        migration_command: Option<String>,

        /// Deploy a ref other than the configured default branch
        #[arg(long)]
        force: bool,
    },
    /// List environments for this app
    #[command(alias = "envs")]
    Environments {
        /// List every environment on the account, not just this app's
        #[arg(long)]
        all: bool,

        /// App whose environments to list
        #[arg(short, long)]
        app: Option<String>,
    },
    /// Re-run an environment's configuration
    Rebuild {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to rebuild
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Roll back to the previous deploy
    Rollback {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to roll back
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Open an SSH session to the environment's app master
    Ssh {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to connect to
        #[arg(short, long)]
        environment: Option<String>,

        /// Command to run remotely instead of an interactive shell
        #[arg(trailing_var_arg = true)]
        cmd: Vec<String>,
    },
    /// Show the environment's latest logs
    Logs {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment whose logs to show
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Chef recipe management
    Recipes {
        #[command(subcommand)]
        command: RecipesCommands,
    },
    /// Maintenance page management
    Web {
        #[command(subcommand)]
        command: WebCommands,
    },
    /// Print version information
    Version,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `ctx` - The runtime context (API settings, project config)
pub async fn handle_command(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Deploy {
            app,
            environment,
            git_ref,
            migrate,
            migration_command,
            force,
        } => {
            deploy::run(
                ctx,
                app.as_deref(),
                environment.as_deref(),
                git_ref.as_deref(),
                migrate,
                migration_command,
                force,
            )
            .await
        }
        Commands::Environments { all, app } => {
            environments::run(ctx, all, app.as_deref()).await
        }
        Commands::Rebuild { app, environment } => {
            rebuild::run(ctx, app.as_deref(), environment.as_deref()).await
        }
        Commands::Rollback { app, environment } => {
            rollback::run(ctx, app.as_deref(), environment.as_deref()).await
        }
        Commands::Ssh {
            app,
            environment,
            cmd,
        } => ssh::run(ctx, app.as_deref(), environment.as_deref(), &cmd).await,
        Commands::Logs { app, environment } => {
            logs::run(ctx, app.as_deref(), environment.as_deref()).await
        }
        Commands::Recipes { command } => recipes::handle_recipes_command(command, ctx).await,
        Commands::Web { command } => web::handle_web_command(command, ctx).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

//! Maintenance page command handlers
//!
//! `web disable` puts the maintenance page up (site offline); `web enable`
//! takes it down again.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Context;
use crate::error::CliError;
use crate::resolver;

/// Maintenance page subcommands
#[derive(Subcommand)]
pub enum WebCommands {
    /// Remove the maintenance page; the site serves traffic again
    Enable {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to act on
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Put up the maintenance page; the site stops serving traffic
    Disable {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to act on
        #[arg(short, long)]
        environment: Option<String>,
    },
}

/// Handle maintenance page commands
pub async fn handle_web_command(command: WebCommands, ctx: &Context) -> Result<()> {
    match command {
        WebCommands::Enable { app, environment } => {
            set_maintenance(ctx, app.as_deref(), environment.as_deref(), false).await
        }
        WebCommands::Disable { app, environment } => {
            set_maintenance(ctx, app.as_deref(), environment.as_deref(), true).await
        }
    }
}

async fn set_maintenance(
    ctx: &Context,
    app: Option<&str>,
    environment: Option<&str>,
    maintenance_on: bool,
) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    let action = if maintenance_on {
        "Putting up"
    } else {
        "Taking down"
    };
    println!("{} the maintenance page on {}...", action, env.name.bold());

    let outcome = client.set_maintenance(env.id, maintenance_on).await?;
    if !outcome.successful {
        return Err(CliError::OperationFailed("Maintenance page update").into());
    }

    println!("{}", "✓ Maintenance page updated!".green().bold());

    Ok(())
}

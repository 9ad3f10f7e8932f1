//! Deploy command handler
//!
//! Resolves app, environment, and ref, then triggers the deploy and reports
//! the outcome.

use anyhow::Result;
use colored::*;
use ey_core::dto::deploy::DeployRequest;

use crate::config::Context;
use crate::error::CliError;
use crate::{git, resolver};

pub async fn run(
    ctx: &Context,
    app: Option<&str>,
    environment: Option<&str>,
    git_ref: Option<&str>,
    migrate: bool,
    migration_command: Option<String>,
    force: bool,
) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    let current_branch = git::current_branch(&ctx.cwd).await?;
    let git_ref = resolver::resolve_ref(
        git_ref,
        ctx.config.default_branch(&env.name),
        current_branch.as_deref(),
        force,
    )?;

    let (migrate_default, command_default) = ctx.config.migrate_defaults(&env.name);
    let migration_command =
        migration_command.or_else(|| command_default.map(str::to_string));
    let migrate = migrate || migrate_default || migration_command.is_some();

    println!(
        "Deploying {} of {} to {}...",
        git_ref.cyan(),
        app.name.bold(),
        env.name.bold()
    );
    if migrate {
        println!(
            "  Migrations: {}",
            migration_command.as_deref().unwrap_or("enabled").dimmed()
        );
    }

    let outcome = client
        .deploy(
            env.id,
            DeployRequest {
                git_ref,
                migrate,
                migration_command,
            },
        )
        .await?;

    if !outcome.successful {
        return Err(CliError::OperationFailed("Deploy").into());
    }

    println!("{}", "✓ Deploy triggered successfully!".green().bold());
    if let Some(message) = outcome.message {
        println!("  {}", message.dimmed());
    }

    Ok(())
}

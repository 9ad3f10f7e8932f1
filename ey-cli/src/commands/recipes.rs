//! Recipe command handlers
//!
//! Uploads the local `cookbooks/` directory as a tarball and triggers recipe
//! runs. The archive is built by shelling out to `tar`, in keeping with how
//! the CLI already shells out to `git` and `ssh`.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Subcommand;
use colored::*;
use tokio::process::Command;

use crate::config::Context;
use crate::error::CliError;
use crate::resolver;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipesCommands {
    /// Upload the local cookbooks/ directory to an environment
    Upload {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to upload to
        #[arg(short, long)]
        environment: Option<String>,
    },
    /// Run the uploaded recipes on an environment
    Apply {
        /// App the environment belongs to
        #[arg(short, long)]
        app: Option<String>,

        /// Environment to run recipes on
        #[arg(short, long)]
        environment: Option<String>,
    },
}

/// Handle recipe commands
pub async fn handle_recipes_command(command: RecipesCommands, ctx: &Context) -> Result<()> {
    match command {
        RecipesCommands::Upload { app, environment } => {
            upload(ctx, app.as_deref(), environment.as_deref()).await
        }
        RecipesCommands::Apply { app, environment } => {
            apply(ctx, app.as_deref(), environment.as_deref()).await
        }
    }
}

async fn upload(ctx: &Context, app: Option<&str>, environment: Option<&str>) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    let archive = pack_cookbooks(&ctx.cwd).await?;

    println!("Uploading cookbooks to {}...", env.name.bold());
    client.upload_recipes(env.id, archive).await?;
    println!("{}", "✓ Recipes uploaded successfully!".green().bold());

    Ok(())
}

async fn apply(ctx: &Context, app: Option<&str>, environment: Option<&str>) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    println!("Running recipes on {}...", env.name.bold());

    let outcome = client.run_recipes(env.id).await?;
    if !outcome.successful {
        return Err(CliError::OperationFailed("Recipe run").into());
    }

    println!("{}", "✓ Recipe run triggered successfully!".green().bold());

    Ok(())
}

/// Tar up `cookbooks/` from the working directory and return the bytes
async fn pack_cookbooks(cwd: &std::path::Path) -> Result<Vec<u8>> {
    let cookbooks = cwd.join("cookbooks");
    if !cookbooks.is_dir() {
        bail!("No cookbooks/ directory found in {}", cwd.display());
    }

    let archive_path: PathBuf =
        std::env::temp_dir().join(format!("ey-recipes-{}.tar.gz", std::process::id()));

    let output = Command::new("tar")
        .arg("czf")
        .arg(&archive_path)
        .arg("cookbooks")
        .current_dir(cwd)
        .output()
        .await
        .context("Failed to run tar")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("tar failed: {}", stderr.trim());
    }

    let bytes = std::fs::read(&archive_path)
        .with_context(|| format!("Failed to read {}", archive_path.display()))?;
    let _ = std::fs::remove_file(&archive_path);

    Ok(bytes)
}

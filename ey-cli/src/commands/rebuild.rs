//! Rebuild command handler

use anyhow::Result;
use colored::*;

use crate::config::Context;
use crate::error::CliError;
use crate::resolver;

pub async fn run(ctx: &Context, app: Option<&str>, environment: Option<&str>) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    println!("Rebuilding {}...", env.name.bold());

    let outcome = client.rebuild(env.id).await?;
    if !outcome.successful {
        return Err(CliError::OperationFailed("Rebuild").into());
    }

    println!("{}", "✓ Rebuild triggered successfully!".green().bold());

    Ok(())
}

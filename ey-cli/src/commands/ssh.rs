//! SSH command handler
//!
//! Resolves the environment's app master and hands the terminal over to the
//! `ssh` binary. The target is validated before any subprocess starts.

use anyhow::Result;
use colored::*;

use crate::config::Context;
use crate::{resolver, ssh};

pub async fn run(
    ctx: &Context,
    app: Option<&str>,
    environment: Option<&str>,
    cmd: &[String],
) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    let target = ssh::ssh_target(&env)?;

    println!("Connecting to {}...", target.cyan());
    ssh::run(&target, cmd)
}

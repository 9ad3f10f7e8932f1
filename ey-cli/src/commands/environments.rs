//! Environments command handler
//!
//! Lists environments for the current app, or for the whole account with
//! `--all`. Finding no app for the repository is a warning here, not an
//! error, so the command stays usable outside configured checkouts.

use anyhow::Result;
use colored::*;
use ey_core::domain::environment::Environment;

use crate::config::Context;
use crate::{git, resolver};

pub async fn run(ctx: &Context, all: bool, app: Option<&str>) -> Result<()> {
    let client = ctx.client()?;

    if all {
        let environments = client.list_environments().await?;
        print_environment_list(&environments);
        return Ok(());
    }

    let apps = match app {
        Some(name) => vec![
            client
                .fetch_app(name)
                .await
                .map_err(|e| resolver::map_fetch_error(name, e))?,
        ],
        None => {
            let remotes = git::remote_urls(&ctx.cwd).await?;
            client.apps_for_repo(&remotes).await?
        }
    };

    if apps.is_empty() {
        println!(
            "{}",
            "No application found for this repository; use --all to list every environment."
                .yellow()
        );
        return Ok(());
    }

    for app in apps {
        let environments = client.app_environments(app.id).await?;
        println!("{}", format!("Environments for {}:", app.name).bold());
        print_environment_list(&environments);
    }

    Ok(())
}

fn print_environment_list(environments: &[Environment]) {
    if environments.is_empty() {
        println!("{}", "No environments found.".yellow());
        return;
    }

    for env in environments {
        print_environment_summary(env);
    }
}

/// Print a one-environment summary
fn print_environment_summary(env: &Environment) {
    println!("  {} {}", "▸".cyan(), env.name.bold());
    println!("    Framework env: {}", env.framework_env.dimmed());
    println!(
        "    Instances:     {}",
        env.instances.len().to_string().dimmed()
    );
    if !env.app_names.is_empty() {
        println!("    Apps:          {}", env.app_names.join(", ").dimmed());
    }
    println!();
}

//! Logs command handler
//!
//! Prints the latest logs per instance: an instance header, then whichever
//! of the main/custom sections are present.

use anyhow::Result;
use colored::*;
use ey_core::domain::log::LogEntry;

use crate::config::Context;
use crate::resolver;

pub async fn run(ctx: &Context, app: Option<&str>, environment: Option<&str>) -> Result<()> {
    let client = ctx.client()?;

    let app = resolver::resolve_app(&client, &ctx.cwd, app).await?;
    let env = resolver::resolve_environment(&client, &ctx.config, &app, environment).await?;

    let entries = client.environment_logs(env.id).await?;

    if entries.is_empty() {
        println!("{}", "No logs found.".yellow());
        return Ok(());
    }

    for entry in &entries {
        print_log_entry(entry);
    }

    Ok(())
}

fn print_log_entry(entry: &LogEntry) {
    println!("  {} {}", "▸".cyan(), entry.instance_name.bold());
    println!(
        "    Updated: {}",
        entry
            .updated_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );

    if let Some(main) = &entry.main {
        println!("\n{}", "Main logs:".bold());
        println!("{}", main);
    }
    if let Some(custom) = &entry.custom {
        println!("\n{}", "Custom logs:".bold());
        println!("{}", custom);
    }
    println!();
}

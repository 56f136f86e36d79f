//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use staffctl_server::db::{create_pool_with_options, migrations};

use crate::config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = config::database_url(args.database_url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.staffctl/.env")?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create employees schema")?;

    println!("employees schema is up to date");
    Ok(())
}

//! Content seeding command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nuryanti_server::db::{create_pool, migrations};
use nuryanti_server::seed::{self, SeedData};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Seed document (JSON); defaults to the built-in site content
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

/// Fill empty content tables
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let data = match &args.file {
        Some(path) => SeedData::from_file(path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?,
        None => SeedData::builtin().context("Built-in seed is invalid")?,
    };

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to apply schema")?;

    let reports = seed::run(&pool, &data).await.context("Seeding failed")?;
    for report in reports {
        if report.skipped {
            println!("{:<14} skipped (already has rows)", report.table);
        } else {
            println!("{:<14} {} inserted", report.table, report.inserted);
        }
    }
    Ok(())
}

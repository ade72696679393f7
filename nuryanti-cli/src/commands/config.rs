//! Configuration inspection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nuryanti_core::SiteConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Load and validate configuration, then print it with secrets redacted
    Check,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Check => check(),
    }
}

fn check() -> Result<()> {
    let site = SiteConfig::from_env().context("Invalid configuration")?;

    for (key, value) in site.summary() {
        println!("{key:<22} {value}");
    }
    println!();
    println!("Configuration OK");
    Ok(())
}

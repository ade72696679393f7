//! HTTP server command
//!
//! Loads the full site configuration first; a missing or malformed
//! variable stops the process before anything connects or binds.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use nuryanti_core::SiteConfig;
use nuryanti_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let site = SiteConfig::from_env().context("Invalid configuration")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        site_origin: site.site_origin.clone(),
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting nuryanti server on {}", config.bind_addr);

    nuryanti_server::serve(site, config)
        .await
        .context("Server error")?;

    Ok(())
}

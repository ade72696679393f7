//! nuryanti CLI - backend for the TK Nuryanti school site
//!
//! Subcommands:
//! - `serve`: registration intake and content API over HTTP
//! - `migrate`: create the database tables
//! - `seed`: load initial site content
//! - `config check`: validate the environment
//! - `preview`: render the messages a registration would produce

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "nuryanti",
    author,
    version,
    about = "Registration intake and content API for the TK Nuryanti school site",
    long_about = "Accepts enrollment registrations, notifies the school and the parent by email, \
                  and hands the browser a WhatsApp link. Also serves the site's content lists \
                  from Postgres."
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create database tables (idempotent)
    Migrate(commands::migrate::MigrateArgs),
    /// Load site content into empty tables
    Seed(commands::seed::SeedArgs),
    /// Inspect configuration
    Config(commands::config::ConfigArgs),
    /// Print the emails and WhatsApp link for a registration without sending anything
    Preview(commands::preview::PreviewArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env in the working directory
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
        Commands::Config(args) => commands::run_config(args),
        Commands::Preview(args) => commands::run_preview(args),
    };

    tracing_setup::shutdown_otel();
    result
}

//! Command implementations for the nuryanti CLI

pub mod config;
pub mod migrate;
pub mod preview;
pub mod seed;
pub mod serve;

pub use config::run_config;
pub use migrate::run_migrate;
pub use preview::run_preview;
pub use seed::run_seed;
pub use serve::run_serve;

/// Structured error types for nuryanti-core.
///
/// Library consumers get `thiserror` enums they can match on; the binary
/// wraps them in `anyhow` with context.
use thiserror::Error;

use crate::registrar::Channel;

/// Startup configuration problems. Always fatal, never per-request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variable absent or empty
    #[error("Missing required environment variable: {var}")]
    Missing { var: &'static str },

    /// Variable present but unusable
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    /// Create an invalid-value error
    pub fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

/// Storage backend failure (write or read).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not be reached or the query failed
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

/// Email delivery failure.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Address could not be parsed into a mailbox
    #[error("invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    /// Message could not be assembled
    #[error("failed to build message: {0}")]
    Build(String),

    /// Transport rejected or dropped the message
    #[error("transport error: {0}")]
    Transport(String),
}

/// Failure of a whole registration attempt.
///
/// Input is validated before the pipeline runs, so every variant is a
/// server-side failure. The HTTP layer answers all of them with a bare
/// `{"success": false}`.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("failed to persist registration: {0}")]
    Persistence(#[source] StoreError),

    #[error("failed to deliver {channel}: {source}")]
    Notification {
        channel: Channel,
        #[source]
        source: NotifyError,
    },
}

impl RegistrationError {
    /// Channel that failed, if the failure was a delivery
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::Persistence(_) => None,
            Self::Notification { channel, .. } => Some(*channel),
        }
    }
}

//! Error types for nuryanti-server startup

use thiserror::Error;

use crate::db::DbError;
use crate::mail::MailSetupError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Mail transport error: {0}")]
    Mail(#[from] MailSetupError),

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(DbError::from(e))
    }
}

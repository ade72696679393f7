//! Repository implementations for database access
//!
//! Repos borrow the shared pool per call. [`PgStore`] owns the pool and
//! adapts the repos to the core storage traits.

pub mod content;
pub mod registrations;

use async_trait::async_trait;
use sqlx::PgPool;

use nuryanti_core::{
    ContentStore, Faq, Game, Program, RegistrationId, RegistrationRecord, RegistrationStore,
    Statistic, StoreError, Teacher, Testimonial,
};

pub use content::ContentRepo;
pub use registrations::RegistrationRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        StoreError::unavailable(e.to_string())
    }
}

/// Postgres-backed store shared by every request
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RegistrationStore for PgStore {
    async fn insert(&self, record: &RegistrationRecord) -> Result<RegistrationId, StoreError> {
        Ok(RegistrationRepo::new(&self.pool).insert(record).await?)
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn programs(&self) -> Result<Vec<Program>, StoreError> {
        Ok(ContentRepo::new(&self.pool).programs().await?)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(ContentRepo::new(&self.pool).testimonials().await?)
    }

    async fn teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        Ok(ContentRepo::new(&self.pool).teachers().await?)
    }

    async fn games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(ContentRepo::new(&self.pool).games().await?)
    }

    async fn statistics(&self) -> Result<Vec<Statistic>, StoreError> {
        Ok(ContentRepo::new(&self.pool).statistics().await?)
    }

    async fn faqs(&self) -> Result<Vec<Faq>, StoreError> {
        Ok(ContentRepo::new(&self.pool).faqs().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_error_becomes_store_unavailable() {
        let err: StoreError = DbError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(err.to_string().contains("pool timed out"));
    }
}

//! Registration repository
//!
//! Append-only. No uniqueness on email or phone: a repeated submission is
//! a second row.

use sqlx::PgPool;

use nuryanti_core::{RegistrationId, RegistrationRecord};

use super::DbError;

/// Registration repository
pub struct RegistrationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a record, returning the generated id.
    pub async fn insert(&self, record: &RegistrationRecord) -> Result<RegistrationId, DbError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO registrations (child_name, parent_name, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(record.child_name())
        .bind(record.parent_name())
        .bind(record.email())
        .bind(record.phone())
        .bind(record.address())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Number of stored registrations
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

//! Storage ports
//!
//! Implementations are shared across concurrent requests behind an `Arc`,
//! so they must be `Send + Sync` and hold their own connection pooling.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{
    Faq, Game, Program, RegistrationId, RegistrationRecord, Statistic, Teacher, Testimonial,
};

/// Append-only sink for registrations
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Store a record, returning its auto-assigned id.
    ///
    /// No uniqueness is enforced: submitting twice stores two rows.
    async fn insert(&self, record: &RegistrationRecord) -> Result<RegistrationId, StoreError>;
}

/// Read-only display content.
///
/// Every listing returns all rows in insertion order. An empty table is an
/// empty `Vec`, never an error.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn programs(&self) -> Result<Vec<Program>, StoreError>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;

    async fn teachers(&self) -> Result<Vec<Teacher>, StoreError>;

    async fn games(&self) -> Result<Vec<Game>, StoreError>;

    async fn statistics(&self) -> Result<Vec<Statistic>, StoreError>;

    async fn faqs(&self) -> Result<Vec<Faq>, StoreError>;
}

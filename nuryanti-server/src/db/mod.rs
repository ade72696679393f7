//! Database layer - connection pool, schema and repositories
//!
//! - One shared pool for the whole process, never built per request
//! - Content tables are read-only at runtime; only seeding writes them
//! - Registrations are append-only

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with, PoolSettings};
pub use repos::{ContentRepo, DbError, PgStore, RegistrationRepo};

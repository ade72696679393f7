//! Schema for registrations and site content
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS`; safe to run on every start.

use sqlx::PgPool;

use super::DbError;

const SCHEMA: &[(&str, &str)] = &[
    (
        "registrations",
        r#"
        CREATE TABLE IF NOT EXISTS registrations (
            id BIGSERIAL PRIMARY KEY,
            child_name TEXT NOT NULL,
            parent_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            address TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "programs",
        r#"
        CREATE TABLE IF NOT EXISTS programs (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            icon TEXT NOT NULL,
            color TEXT NOT NULL,
            image TEXT NOT NULL
        )
        "#,
    ),
    (
        "testimonials",
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            image TEXT NOT NULL,
            quote TEXT NOT NULL
        )
        "#,
    ),
    (
        "teachers",
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            image TEXT NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    ),
    (
        "games",
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            image TEXT NOT NULL,
            description TEXT NOT NULL,
            age_group TEXT NOT NULL
        )
        "#,
    ),
    (
        "statistics",
        r#"
        CREATE TABLE IF NOT EXISTS statistics (
            id SERIAL PRIMARY KEY,
            icon TEXT NOT NULL,
            value TEXT NOT NULL,
            label TEXT NOT NULL,
            color TEXT NOT NULL
        )
        "#,
    ),
    (
        "faqs",
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL
        )
        "#,
    ),
];

/// Names of every table this crate owns, in creation order
pub fn tables() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|(table, _)| *table)
}

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    for (table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "table ready");
    }

    tracing::info!("Migrations complete");
    Ok(())
}

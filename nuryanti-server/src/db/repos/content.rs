//! Content repository - read-only listings
//!
//! Each listing returns the whole table ordered by id, which is insertion
//! order for seeded rows. No filtering, no pagination.

use sqlx::PgPool;

use nuryanti_core::{Faq, Game, Program, Statistic, Teacher, Testimonial};

use super::DbError;

/// Content repository
pub struct ContentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn programs(&self) -> Result<Vec<Program>, DbError> {
        let rows: Vec<(i32, String, String, String, String, String)> = sqlx::query_as(
            "SELECT id, title, description, icon, color, image FROM programs ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title, description, icon, color, image)| Program {
                id,
                title,
                description,
                icon,
                color,
                image,
            })
            .collect())
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, DbError> {
        let rows: Vec<(i32, String, String, String, String)> =
            sqlx::query_as("SELECT id, name, role, image, quote FROM testimonials ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, role, image, quote)| Testimonial {
                id,
                name,
                role,
                image,
                quote,
            })
            .collect())
    }

    pub async fn teachers(&self) -> Result<Vec<Teacher>, DbError> {
        let rows: Vec<(i32, String, String, String, String)> = sqlx::query_as(
            "SELECT id, name, role, image, description FROM teachers ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, role, image, description)| Teacher {
                id,
                name,
                role,
                image,
                description,
            })
            .collect())
    }

    pub async fn games(&self) -> Result<Vec<Game>, DbError> {
        let rows: Vec<(i32, String, String, String, String)> = sqlx::query_as(
            "SELECT id, name, image, description, age_group FROM games ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, image, description, age_group)| Game {
                id,
                name,
                image,
                description,
                age_group,
            })
            .collect())
    }

    pub async fn statistics(&self) -> Result<Vec<Statistic>, DbError> {
        let rows: Vec<(i32, String, String, String, String)> =
            sqlx::query_as("SELECT id, icon, value, label, color FROM statistics ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, icon, value, label, color)| Statistic {
                id,
                icon,
                value,
                label,
                color,
            })
            .collect())
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, DbError> {
        let rows: Vec<(i32, String, String)> =
            sqlx::query_as("SELECT id, question, answer FROM faqs ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, question, answer)| Faq {
                id,
                question,
                answer,
            })
            .collect())
    }
}

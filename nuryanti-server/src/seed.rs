//! Content seeding
//!
//! Loads a JSON seed document and fills the content tables. A collection is
//! written only while its table is empty, so seeding twice never duplicates
//! rows. Each collection commits in its own transaction.

use std::path::Path;

use serde::Deserialize;
use sqlx::PgPool;

use nuryanti_core::memory::MemoryContent;
use nuryanti_core::{Faq, Game, Program, Statistic, Teacher, Testimonial};

/// Built-in seed: the school's published programs, testimonials and so on
pub const DEFAULT_SEED: &str = include_str!("../seed/content.json");

/// Seeding error type
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Seed document. Absent collections are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub programs: Vec<Program>,
    pub testimonials: Vec<Testimonial>,
    pub teachers: Vec<Teacher>,
    pub games: Vec<Game>,
    pub statistics: Vec<Statistic>,
    pub faqs: Vec<Faq>,
}

impl SeedData {
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(DEFAULT_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Seed content with ids assigned in document order, for in-memory stores
impl From<SeedData> for MemoryContent {
    fn from(seed: SeedData) -> Self {
        fn numbered<T>(rows: Vec<T>, set_id: fn(&mut T, i32)) -> Vec<T> {
            rows.into_iter()
                .zip(1..)
                .map(|(mut row, id)| {
                    set_id(&mut row, id);
                    row
                })
                .collect()
        }

        Self {
            programs: numbered(seed.programs, |r, id| r.id = id),
            testimonials: numbered(seed.testimonials, |r, id| r.id = id),
            teachers: numbered(seed.teachers, |r, id| r.id = id),
            games: numbered(seed.games, |r, id| r.id = id),
            statistics: numbered(seed.statistics, |r, id| r.id = id),
            faqs: numbered(seed.faqs, |r, id| r.id = id),
        }
    }
}

/// Outcome for one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub table: &'static str,
    pub inserted: usize,
    /// Table already had rows, nothing written
    pub skipped: bool,
}

/// A content row that can be written by the generic seeder.
///
/// Every content column is TEXT, so values are bound as `&str` in
/// `COLUMNS` order.
trait SeedRow {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<&str>;
}

impl SeedRow for Program {
    const TABLE: &'static str = "programs";
    const COLUMNS: &'static [&'static str] = &["title", "description", "icon", "color", "image"];

    fn values(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.icon.as_str(),
            self.color.as_str(),
            self.image.as_str(),
        ]
    }
}

impl SeedRow for Testimonial {
    const TABLE: &'static str = "testimonials";
    const COLUMNS: &'static [&'static str] = &["name", "role", "image", "quote"];

    fn values(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str(), self.image.as_str(), self.quote.as_str()]
    }
}

impl SeedRow for Teacher {
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static [&'static str] = &["name", "role", "image", "description"];

    fn values(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.image.as_str(),
            self.description.as_str(),
        ]
    }
}

impl SeedRow for Game {
    const TABLE: &'static str = "games";
    const COLUMNS: &'static [&'static str] = &["name", "image", "description", "age_group"];

    fn values(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.image.as_str(),
            self.description.as_str(),
            self.age_group.as_str(),
        ]
    }
}

impl SeedRow for Statistic {
    const TABLE: &'static str = "statistics";
    const COLUMNS: &'static [&'static str] = &["icon", "value", "label", "color"];

    fn values(&self) -> Vec<&str> {
        vec![self.icon.as_str(), self.value.as_str(), self.label.as_str(), self.color.as_str()]
    }
}

impl SeedRow for Faq {
    const TABLE: &'static str = "faqs";
    const COLUMNS: &'static [&'static str] = &["question", "answer"];

    fn values(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}

/// Seed every collection in `data`.
pub async fn run(pool: &PgPool, data: &SeedData) -> Result<Vec<CollectionReport>, SeedError> {
    Ok(vec![
        seed_collection(pool, &data.programs).await?,
        seed_collection(pool, &data.testimonials).await?,
        seed_collection(pool, &data.teachers).await?,
        seed_collection(pool, &data.games).await?,
        seed_collection(pool, &data.statistics).await?,
        seed_collection(pool, &data.faqs).await?,
    ])
}

async fn seed_collection<T: SeedRow>(
    pool: &PgPool,
    rows: &[T],
) -> Result<CollectionReport, SeedError> {
    let mut tx = pool.begin().await?;

    // Serialize concurrent seeders on the emptiness check
    sqlx::query(&format!("LOCK TABLE {} IN EXCLUSIVE MODE", T::TABLE))
        .execute(&mut *tx)
        .await?;

    let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", T::TABLE))
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        tx.rollback().await?;
        tracing::info!(table = T::TABLE, existing, "table already populated, skipping");
        return Ok(CollectionReport {
            table: T::TABLE,
            inserted: 0,
            skipped: true,
        });
    }

    let sql = insert_sql(T::TABLE, T::COLUMNS);
    for row in rows {
        let mut query = sqlx::query(&sql);
        for value in row.values() {
            query = query.bind(value);
        }
        query.execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::info!(table = T::TABLE, inserted = rows.len(), "seeded");

    Ok(CollectionReport {
        table: T::TABLE,
        inserted: rows.len(),
        skipped: false,
    })
}

/// `INSERT INTO t (a, b) VALUES ($1, $2)`
fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_seed_matches_published_content() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.programs.len(), 4);
        assert_eq!(seed.testimonials.len(), 3);
        assert_eq!(seed.statistics.len(), 4);
        assert_eq!(seed.teachers.len(), 4);
        assert_eq!(seed.games.len(), 6);
        assert_eq!(seed.faqs.len(), 4);

        assert_eq!(seed.programs[0].title, "Program Tahfidz");
        assert_eq!(seed.games[1].age_group, "2-4 tahun");
    }

    #[test]
    fn values_line_up_with_columns() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.programs[0].values().len(), Program::COLUMNS.len());
        assert_eq!(seed.testimonials[0].values().len(), Testimonial::COLUMNS.len());
        assert_eq!(seed.teachers[0].values().len(), Teacher::COLUMNS.len());
        assert_eq!(seed.games[0].values().len(), Game::COLUMNS.len());
        assert_eq!(seed.statistics[0].values().len(), Statistic::COLUMNS.len());
        assert_eq!(seed.faqs[0].values().len(), Faq::COLUMNS.len());
    }

    #[test]
    fn insert_statement_shape() {
        assert_eq!(
            insert_sql("faqs", Faq::COLUMNS),
            "INSERT INTO faqs (question, answer) VALUES ($1, $2)"
        );
        assert_eq!(
            insert_sql("games", Game::COLUMNS),
            "INSERT INTO games (name, image, description, age_group) VALUES ($1, $2, $3, $4)"
        );
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let seed = SeedData::from_json(r#"{"faqs": [{"question": "Q?", "answer": "A."}]}"#).unwrap();
        assert!(seed.programs.is_empty());
        assert_eq!(seed.faqs.len(), 1);
    }

    #[test]
    fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"programs": [{{"title": "T", "description": "D", "icon": "Book", "color": "c", "image": "/i.jpg"}}]}}"#
        )
        .unwrap();

        let seed = SeedData::from_file(file.path()).unwrap();
        assert_eq!(seed.programs.len(), 1);
        assert_eq!(seed.programs[0].icon, "Book");
    }

    #[test]
    fn rejects_malformed_document() {
        let err = SeedData::from_json(r#"{"programs": [{"title": "no other fields"}]}"#).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn memory_content_numbers_rows() {
        let content = MemoryContent::from(SeedData::builtin().unwrap());
        let ids: Vec<i32> = content.games.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeding_twice_does_not_duplicate() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let seed = SeedData::builtin().unwrap();
        run(&pool, &seed).await.unwrap();
        let before = crate::db::ContentRepo::new(&pool).programs().await.unwrap().len();

        let second = run(&pool, &seed).await.unwrap();
        assert!(second.iter().all(|report| report.skipped));
        let after = crate::db::ContentRepo::new(&pool).programs().await.unwrap().len();
        assert_eq!(before, after);
    }
}

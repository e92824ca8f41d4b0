//! Repository for the `pages` table.

use sqlx::PgPool;

use crate::models::page::{Page, UpsertPage};

const COLUMNS: &str = "id, title, content, created_at, updated_at";

pub struct PageRepo;

impl PageRepo {
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the page or replace its content (and title, when given).
    pub async fn upsert(pool: &PgPool, id: &str, input: &UpsertPage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (id, title, content)
             VALUES ($1, COALESCE($2, ''), $3)
             ON CONFLICT (id) DO UPDATE SET
                title = COALESCE($2, pages.title),
                content = EXCLUDED.content
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }
}

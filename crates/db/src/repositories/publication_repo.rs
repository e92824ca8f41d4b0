//! Repository for the `publications` table.

use gohte_core::publication::PublicationInput;
use gohte_core::types::DbId;
use sqlx::PgPool;

use crate::models::publication::Publication;

const COLUMNS: &str = "id, year, publication, article, created_at, updated_at";

/// Provides CRUD operations for publication listings.
pub struct PublicationRepo;

impl PublicationRepo {
    /// List all publications, newest year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Publication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publications ORDER BY year DESC, id ASC");
        sqlx::query_as::<_, Publication>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publications WHERE id = $1");
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &PublicationInput,
    ) -> Result<Publication, sqlx::Error> {
        let query = format!(
            "INSERT INTO publications (year, publication, article)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(&input.year)
            .bind(&input.publication)
            .bind(&input.article)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PublicationInput,
    ) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!(
            "UPDATE publications SET year = $2, publication = $3, article = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.publication)
            .bind(&input.article)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

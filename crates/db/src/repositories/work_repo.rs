//! Repository for the `work` table.

use gohte_core::types::DbId;
use gohte_core::work::{WorkFields, WorkType};
use sqlx::PgPool;

use crate::models::work::Work;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, description, location, completion_year, \
                       architects, other_participants, photography, area, principal, \
                       interior_designer, main_image, content, created_at, updated_at";

/// Provides CRUD operations for portfolio works.
pub struct WorkRepo;

impl WorkRepo {
    /// List every work, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Work>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Works of the same type, newest completion year first, excluding `exclude_id`.
    pub async fn list_related(
        pool: &PgPool,
        work_type: WorkType,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work
             WHERE type = $1 AND id <> $2
             ORDER BY completion_year DESC, id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(work_type.as_str())
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Insert a work, returning the created row.
    pub async fn create(
        pool: &PgPool,
        fields: &WorkFields,
        content: &str,
    ) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO work (name, type, description, location, completion_year,
                               architects, other_participants, photography, area,
                               principal, interior_designer, main_image, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(&fields.name)
            .bind(fields.work_type.as_str())
            .bind(&fields.description)
            .bind(&fields.location)
            .bind(fields.completion_year)
            .bind(&fields.architects)
            .bind(&fields.other_participants)
            .bind(&fields.photography)
            .bind(&fields.area)
            .bind(&fields.principal)
            .bind(&fields.interior_designer)
            .bind(&fields.main_image)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every editable column of a work.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &WorkFields,
        content: &str,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE work SET
                name = $2,
                type = $3,
                description = $4,
                location = $5,
                completion_year = $6,
                architects = $7,
                other_participants = $8,
                photography = $9,
                area = $10,
                principal = $11,
                interior_designer = $12,
                main_image = $13,
                content = $14
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(fields.work_type.as_str())
            .bind(&fields.description)
            .bind(&fields.location)
            .bind(fields.completion_year)
            .bind(&fields.architects)
            .bind(&fields.other_participants)
            .bind(&fields.photography)
            .bind(&fields.area)
            .bind(&fields.principal)
            .bind(&fields.interior_designer)
            .bind(&fields.main_image)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

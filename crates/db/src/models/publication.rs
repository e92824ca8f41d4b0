//! Publication listing model.

use gohte_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `publications` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Publication {
    pub id: DbId,
    pub year: String,
    pub publication: String,
    pub article: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

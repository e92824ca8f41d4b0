//! Static page copy model.

use gohte_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pages` table, keyed by slug.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert body. A missing title keeps the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPage {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

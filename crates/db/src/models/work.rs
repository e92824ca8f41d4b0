//! Portfolio work model.

use gohte_core::blocks::ContentBlocks;
use gohte_core::error::CoreError;
use gohte_core::gallery::GalleryEntry;
use gohte_core::types::{DbId, Timestamp};
use gohte_core::work::{WorkDraft, WorkFields, WorkType};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `work` table.
///
/// `work_type` is the display name constrained to `Residential` or
/// `Commercial` by the schema.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub work_type: String,
    pub description: String,
    pub location: String,
    pub completion_year: i32,
    pub architects: String,
    pub other_participants: String,
    pub photography: String,
    pub area: String,
    pub principal: String,
    pub interior_designer: String,
    pub main_image: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Work {
    pub fn fields(&self) -> Result<WorkFields, CoreError> {
        Ok(WorkFields {
            name: self.name.clone(),
            work_type: WorkType::from_name(&self.work_type)?,
            description: self.description.clone(),
            location: self.location.clone(),
            completion_year: self.completion_year,
            architects: self.architects.clone(),
            other_participants: self.other_participants.clone(),
            photography: self.photography.clone(),
            area: self.area.clone(),
            principal: self.principal.clone(),
            interior_designer: self.interior_designer.clone(),
            main_image: self.main_image.clone(),
        })
    }

    pub fn blocks(&self) -> ContentBlocks {
        ContentBlocks::deserialize(&self.content)
    }

    /// Editor working copy of this row.
    pub fn to_draft(&self) -> Result<WorkDraft, CoreError> {
        Ok(WorkDraft {
            id: self.id,
            fields: self.fields()?,
            blocks: self.blocks(),
        })
    }
}

impl GalleryEntry for Work {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn work_type(&self) -> WorkType {
        WorkType::from_name(&self.work_type).unwrap_or(WorkType::Residential)
    }
}

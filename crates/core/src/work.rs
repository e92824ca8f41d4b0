//! Portfolio work types shared by the editor, gallery and persistence layers.

use serde::{Deserialize, Serialize};

use crate::blocks::ContentBlocks;
use crate::error::CoreError;
use crate::types::DbId;

/// Project category. Stored as its display name in the `work.type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Residential,
    Commercial,
}

impl WorkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    /// Parse from the database `type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "Residential" => Ok(Self::Residential),
            "Commercial" => Ok(Self::Commercial),
            other => Err(CoreError::Validation(format!(
                "Unknown work type '{other}'. Must be one of: Residential, Commercial"
            ))),
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable "Project Details" fields of a work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkFields {
    pub name: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub completion_year: i32,
    #[serde(default)]
    pub architects: String,
    #[serde(default)]
    pub other_participants: String,
    #[serde(default)]
    pub photography: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub interior_designer: String,
    #[serde(default)]
    pub main_image: String,
}

impl WorkFields {
    /// Defaults for a work created from the admin "new project" action.
    pub fn new_project(year: i32) -> Self {
        Self {
            name: "New Project".to_string(),
            work_type: WorkType::Residential,
            description: String::new(),
            location: String::new(),
            completion_year: year,
            architects: String::new(),
            other_participants: String::new(),
            photography: String::new(),
            area: String::new(),
            principal: String::new(),
            interior_designer: String::new(),
            main_image: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Project name is required".into()));
        }
        Ok(())
    }
}

/// Partial update of [`WorkFields`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkFieldsPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub work_type: Option<WorkType>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub completion_year: Option<i32>,
    pub architects: Option<String>,
    pub other_participants: Option<String>,
    pub photography: Option<String>,
    pub area: Option<String>,
    pub principal: Option<String>,
    pub interior_designer: Option<String>,
    pub main_image: Option<String>,
}

impl WorkFieldsPatch {
    /// Apply every present field onto `fields`.
    pub fn apply_to(self, fields: &mut WorkFields) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut fields.name, self.name);
        set(&mut fields.work_type, self.work_type);
        set(&mut fields.description, self.description);
        set(&mut fields.location, self.location);
        set(&mut fields.completion_year, self.completion_year);
        set(&mut fields.architects, self.architects);
        set(&mut fields.other_participants, self.other_participants);
        set(&mut fields.photography, self.photography);
        set(&mut fields.area, self.area);
        set(&mut fields.principal, self.principal);
        set(&mut fields.interior_designer, self.interior_designer);
        set(&mut fields.main_image, self.main_image);
    }
}

/// Working copy of a work held by the admin editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDraft {
    pub id: DbId,
    pub fields: WorkFields,
    pub blocks: ContentBlocks,
}

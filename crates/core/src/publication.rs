//! Publication listing input validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Create/update body of a publication record. `year` is kept as text, the
/// way the listing shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationInput {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub publication: String,
    #[serde(default)]
    pub article: String,
}

impl PublicationInput {
    /// Trim every field and check it is fit for storage.
    pub fn normalized(&self) -> Result<Self, CoreError> {
        let input = Self {
            year: self.year.trim().to_string(),
            publication: self.publication.trim().to_string(),
            article: self.article.trim().to_string(),
        };

        if input.year.is_empty() || input.publication.is_empty() || input.article.is_empty() {
            return Err(CoreError::Validation("Please fill all fields".into()));
        }
        if input.year.len() > 4 || !input.year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Validation(
                "Year must be a number of at most 4 digits".into(),
            ));
        }
        Ok(input)
    }
}

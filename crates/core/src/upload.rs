//! Media upload validation and storage naming.

use crate::error::CoreError;

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Storage prefix for every uploaded file.
pub const UPLOAD_PREFIX: &str = "public_uploads";

/// Accepted image content types.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Only JPG, PNG, GIF, or WEBP images are allowed")]
    UnsupportedType(String),

    #[error("File must be smaller than 5MB")]
    TooLarge(usize),

    #[error("File is empty")]
    Empty,
}

impl From<UploadError> for CoreError {
    fn from(err: UploadError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Check content type and size of an incoming file.
pub fn validate_upload(content_type: &str, size: usize) -> Result<(), UploadError> {
    // Ignore parameters such as "; charset=...".
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if !ALLOWED_CONTENT_TYPES.contains(&essence.as_str()) {
        return Err(UploadError::UnsupportedType(content_type.to_string()));
    }
    if size == 0 {
        return Err(UploadError::Empty);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }
    Ok(())
}

/// Storage key `public_uploads/{millis}.{ext}`.
///
/// The extension is taken from the original file name, lowercased and
/// restricted to ASCII alphanumerics; `bin` when nothing usable remains.
pub fn storage_key(original_name: &str, now_millis: i64) -> String {
    let ext: String = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(10)
        .collect::<String>()
        .to_ascii_lowercase();
    let ext = if ext.is_empty() { "bin".to_string() } else { ext };
    format!("{UPLOAD_PREFIX}/{now_millis}.{ext}")
}

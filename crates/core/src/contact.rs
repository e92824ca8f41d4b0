//! Public contact form validation and the outgoing email template parameters.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Per-field error messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Submitted contact form. Missing fields deserialize as empty so they
/// surface as field errors rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(custom(function = "required", message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "required", message = "Phone number is required"))]
    pub phone: String,
    #[serde(default)]
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "required", message = "Message is required"))]
    pub message: String,
}

/// Template parameters of the contact email, named as the mail template
/// expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmailParams {
    pub from_name: String,
    pub from_email: String,
    pub phone_number: String,
    pub message: String,
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn email_address(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Email is required")));
    }
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new("email").with_message(Cow::Borrowed("Email is invalid")));
    }
    Ok(())
}

fn fallback_message(field: &str, code: &str) -> String {
    match (field, code) {
        ("name", _) => "Name is required".into(),
        ("phone", _) => "Phone number is required".into(),
        ("email", "email") => "Email is invalid".into(),
        ("email", _) => "Email is required".into(),
        ("message", _) => "Message is required".into(),
        (field, code) => format!("{field}: {code}"),
    }
}

impl ContactForm {
    /// Validate every field, collecting one message per failing field.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            if let Some(err) = errs.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| fallback_message(&field, &err.code));
                out.insert(field, message);
            }
        }
        Err(out)
    }

    /// Trimmed template parameters for a validated form.
    pub fn email_params(&self) -> ContactEmailParams {
        ContactEmailParams {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

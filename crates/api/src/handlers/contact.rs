//! Public contact form submission.

use axum::extract::State;
use axum::Json;
use gohte_core::contact::ContactForm;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactSent {
    pub message: &'static str,
}

/// POST /api/v1/contact
///
/// 422 with per-field messages when the form is incomplete; 502 when the mail
/// service fails.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<DataResponse<ContactSent>>> {
    form.check().map_err(AppError::Fields)?;

    state
        .mailer
        .send_contact(&form.email_params())
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    tracing::info!("Contact message sent");
    Ok(Json(DataResponse {
        data: ContactSent {
            message: "Thank you for your message! We'll get back to you soon.",
        },
    }))
}

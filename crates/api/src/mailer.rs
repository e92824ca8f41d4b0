//! Contact email delivery through the EmailJS REST API.
//!
//! A failed send is reported once; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use gohte_core::contact::ContactEmailParams;
use serde::Serialize;

use crate::config::EmailConfig;

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// Network, DNS or timeout failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Mail API returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends the contact-form email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, params: &ContactEmailParams) -> Result<(), MailError>;
}

/// Request body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactEmailParams,
}

pub struct EmailJsMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send_contact(&self, params: &ContactEmailParams) -> Result<(), MailError> {
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

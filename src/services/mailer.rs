use crate::config::EmailSettings;
use crate::core::{render_feedback_html, subject};
use crate::error::{GatewayError, Result};
use crate::models::upstream::{ResendAccepted, ResendEmail, ResendError};
use crate::models::{FeedbackEmailRequest, FeedbackEmailResponse};
use reqwest::Client;
use std::time::Duration;

/// Resend client for the post-move feedback email
pub struct FeedbackMailer {
    base_url: String,
    api_key: Option<String>,
    from_address: String,
    client: Client,
}

impl FeedbackMailer {
    /// Create a new mailer
    pub fn new(settings: &EmailSettings) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            from_address: settings.from_address.clone(),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fails with a configuration error when no API key is set
    pub fn ensure_configured(&self) -> Result<()> {
        self.api_key().map(|_| ())
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Config("Resend API key not configured".to_string()))
    }

    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    /// Render and hand the feedback email to Resend
    ///
    /// Success means Resend accepted the message; delivery is not tracked.
    pub async fn send_feedback(&self, req: &FeedbackEmailRequest) -> Result<FeedbackEmailResponse> {
        let key = self.api_key()?;

        let subject = subject(req.reminder());
        let html = render_feedback_html(&req.customer_name, &req.feedback_link);

        let payload = ResendEmail {
            from: &self.from_address,
            to: vec![req.customer_email.as_str()],
            subject,
            html: &html,
        };

        let url = format!("{}/emails", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Resend rejected feedback email: {} - {}", status, body);
            return Err(resend_error(status.as_u16(), &body));
        }

        let accepted: ResendAccepted = response.json().await?;

        tracing::info!(
            "Feedback email accepted (id: {}, reminder: {})",
            accepted.id,
            req.reminder()
        );

        Ok(FeedbackEmailResponse {
            success: true,
            email_id: accepted.id,
        })
    }
}

fn resend_error(status: u16, body: &str) -> GatewayError {
    let detail = serde_json::from_str::<ResendError>(body)
        .ok()
        .and_then(|e| e.message.or(e.name));

    match detail {
        Some(detail) => GatewayError::Upstream(format!("Resend API error: {} - {}", status, detail)),
        None => GatewayError::Upstream(format!("Resend API error: {}", status)),
    }
}

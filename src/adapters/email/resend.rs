use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::email_sender::{EmailSender, OutboundEmail},
    infra::http_client,
};
use secrecy::{ExposeSecret, SecretString};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    endpoint: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: http_client::build_client(),
            api_key,
            endpoint: RESEND_ENDPOINT.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl<'a> From<&'a OutboundEmail> for ResendReq<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        let body = ResendReq::from(email);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::EmailDelivery(format!(
                "Resend API error ({status}): {detail}"
            )));
        }

        Ok(())
    }

    fn channel(&self) -> &'static str {
        "resend"
    }
}

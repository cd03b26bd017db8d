use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::email_sender::{EmailSender, OutboundEmail},
};

/// Port that implies TLS from the first byte; every other port upgrades via STARTTLS.
pub const IMPLICIT_TLS_PORT: u16 = 465;

pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    pub fn new(host: &str, port: u16, user: String, password: SecretString) -> AppResult<Self> {
        let builder = if port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        }
        .map_err(|e| AppError::Internal(format!("Invalid SMTP host {host}: {e}")))?;

        let credentials = Credentials::new(user, password.expose_secret().to_string());
        let transport = builder.port(port).credentials(credentials).build();

        Ok(Self { transport })
    }
}

fn build_message(email: &OutboundEmail) -> AppResult<Message> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| AppError::EmailDelivery(format!("Invalid sender address: {e}")))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| AppError::EmailDelivery(format!("Invalid recipient address: {e}")))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| AppError::EmailDelivery(format!("Failed to build message: {e}")))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::EmailDelivery(format!("SMTP send failed: {e}")))?;

        tracing::info!("SMTP email sent successfully");
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "smtp"
    }
}

use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    application::ports::email_sender::{EmailSender, OutboundEmail},
};

/// Channel used when no provider is configured: the message is logged, not sent.
#[derive(Clone, Default)]
pub struct LogOnlyEmailSender;

impl LogOnlyEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for LogOnlyEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.text,
            "Email notification (not sent)"
        );
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "none"
    }
}

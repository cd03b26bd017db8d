use async_trait::async_trait;

use crate::app_error::AppResult;

/// A fully rendered message ready for a delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Delivery channel for outbound mail (log-only, Resend, SMTP).
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()>;

    /// Short name used in logs.
    fn channel(&self) -> &'static str;
}

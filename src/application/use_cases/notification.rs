use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::AppResult,
    application::{
        email_templates::waitlist_registration_email,
        ports::email_sender::{EmailSender, OutboundEmail},
    },
    domain::entities::waitlist_entry::WaitlistEntry,
};

use super::waitlist::WaitlistNotifier;

/// Renders the admin notification for an entry and hands it to the
/// configured delivery channel.
#[derive(Clone)]
pub struct EmailNotifier {
    sender: Arc<dyn EmailSender>,
    from: String,
    admin_email: String,
}

impl EmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, from: String, admin_email: String) -> Self {
        Self {
            sender,
            from,
            admin_email,
        }
    }

    pub fn compose(&self, entry: &WaitlistEntry) -> OutboundEmail {
        let rendered = waitlist_registration_email(entry);
        OutboundEmail {
            from: self.from.clone(),
            to: self.admin_email.clone(),
            subject: rendered.subject,
            html: rendered.html,
            text: rendered.text,
        }
    }
}

#[async_trait]
impl WaitlistNotifier for EmailNotifier {
    #[instrument(skip_all, fields(channel = self.sender.channel(), entry_id = %entry.id))]
    async fn notify(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let email = self.compose(entry);
        self.sender.send(&email).await?;
        tracing::debug!("Waitlist notification dispatched");
        Ok(())
    }
}

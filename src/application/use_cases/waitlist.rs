use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use waitlist_types::JoinWaitlistRequest;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{normalize_email, validate_signup},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const SUCCESS_MESSAGE: &str = "Thank you for joining the waitlist! We'll be in touch soon.";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}

/// Receives every successfully persisted entry.
#[async_trait]
pub trait WaitlistNotifier: Send + Sync {
    async fn notify(&self, entry: &WaitlistEntry) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    /// `None` when no store is configured.
    repo: Option<Arc<dyn WaitlistRepo>>,
    notifier: Arc<dyn WaitlistNotifier>,
}

impl WaitlistUseCases {
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>, notifier: Arc<dyn WaitlistNotifier>) -> Self {
        Self { repo, notifier }
    }

    pub fn has_store(&self) -> bool {
        self.repo.is_some()
    }

    /// Validates, dedupes and stores a signup, then fires the notification.
    ///
    /// The notification runs on its own task; its outcome is logged and
    /// never affects the returned result.
    #[instrument(skip(self, form), fields(email = %form.email.trim()))]
    pub async fn submit(&self, form: JoinWaitlistRequest) -> AppResult<WaitlistEntry> {
        let signup = validate_signup(&form)?;

        let Some(repo) = self.repo.as_ref() else {
            tracing::error!("Waitlist submission rejected: no store configured");
            return Err(AppError::StoreUnavailable);
        };

        let email = normalize_email(&signup.email);

        if repo.exists_by_email(&email).await? {
            tracing::info!("Duplicate waitlist signup");
            return Err(AppError::AlreadyRegistered);
        }

        let entry = WaitlistEntry::new_pending(signup.name, email, signup.research_interests);
        repo.insert(&entry).await?;

        tracing::info!(entry_id = %entry.id, "Waitlist entry saved");

        self.spawn_notification(entry.clone());

        Ok(entry)
    }

    /// Number of stored entries; zero if the store is absent or the read fails.
    #[instrument(skip(self))]
    pub async fn count(&self) -> u64 {
        let Some(repo) = self.repo.as_ref() else {
            return 0;
        };

        match repo.count().await {
            Ok(n) => u64::try_from(n).unwrap_or(0),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read waitlist count");
                0
            }
        }
    }

    fn spawn_notification(&self, entry: WaitlistEntry) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(&entry).await {
                tracing::error!(
                    error = %err,
                    entry_id = %entry.id,
                    "Failed to send waitlist notification"
                );
            }
        });
    }
}

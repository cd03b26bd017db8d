//! In-memory mock implementations of the waitlist ports.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        ports::email_sender::{EmailSender, OutboundEmail},
        use_cases::waitlist::{WaitlistNotifier, WaitlistRepo},
    },
    domain::entities::waitlist_entry::WaitlistEntry,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
///
/// `insert` rejects a second entry for the same email, like the unique index.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    exists_calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            exists_calls: AtomicUsize::new(0),
        }
    }

    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().iter().any(|e| e.email == email))
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::AlreadyRegistered);
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.entries.lock().unwrap().len() as i64)
    }
}

/// Store whose every call fails as if the database were down.
#[derive(Default)]
pub struct UnreachableWaitlistRepo;

#[async_trait]
impl WaitlistRepo for UnreachableWaitlistRepo {
    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Err(AppError::StoreUnavailable)
    }

    async fn insert(&self, _entry: &WaitlistEntry) -> AppResult<()> {
        Err(AppError::StoreUnavailable)
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::StoreUnavailable)
    }
}

/// Store that loses every insert to a concurrent signup: the existence
/// check passes, then the unique index rejects the row.
#[derive(Default)]
pub struct RacingWaitlistRepo {
    insert_calls: AtomicUsize,
}

impl RacingWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for RacingWaitlistRepo {
    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Ok(false)
    }

    async fn insert(&self, _entry: &WaitlistEntry) -> AppResult<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::AlreadyRegistered)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(1)
    }
}

// ============================================================================
// Notifiers
// ============================================================================

/// Records notified entries. Notification runs on a spawned task, so tests
/// use `wait_for` before asserting.
#[derive(Default)]
pub struct InMemoryWaitlistNotifier {
    notified: Mutex<Vec<WaitlistEntry>>,
    signal: Notify,
}

impl InMemoryWaitlistNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notified(&self) -> Vec<WaitlistEntry> {
        self.notified.lock().unwrap().clone()
    }

    /// Waits (up to one second) until at least `count` entries were notified.
    pub async fn wait_for(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while self.notified.lock().unwrap().len() < count {
                self.signal.notified().await;
            }
        })
        .await
        .expect("timed out waiting for waitlist notifications");
    }
}

#[async_trait]
impl WaitlistNotifier for InMemoryWaitlistNotifier {
    async fn notify(&self, entry: &WaitlistEntry) -> AppResult<()> {
        self.notified.lock().unwrap().push(entry.clone());
        self.signal.notify_one();
        Ok(())
    }
}

/// Notifier that always fails, as a broken email provider would.
#[derive(Default)]
pub struct FailingWaitlistNotifier;

#[async_trait]
impl WaitlistNotifier for FailingWaitlistNotifier {
    async fn notify(&self, _entry: &WaitlistEntry) -> AppResult<()> {
        Err(AppError::EmailDelivery("provider rejected the message".into()))
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

/// Captures outbound email instead of delivering it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, email: &OutboundEmail) -> AppResult<()> {
        if self.fail {
            return Err(AppError::EmailDelivery("mock send failure".into()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "in_memory"
    }
}

//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::{AppConfig, EmailConfig},
    test_utils::{InMemoryWaitlistNotifier, InMemoryWaitlistRepo},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo, notifier) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@example.com".into()))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    with_store: bool,
    repo_override: Option<Arc<dyn WaitlistRepo>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            with_store: true,
            repo_override: None,
        }
    }

    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Use a custom store instead of the in-memory one. The returned
    /// `InMemoryWaitlistRepo` is then unused.
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo_override = Some(repo);
        self
    }

    /// Build the state as if `DATABASE_URL` were unset.
    pub fn without_store(mut self) -> Self {
        self.with_store = false;
        self
    }

    /// Build the `AppState`, returning the mocks for assertions. The repo is
    /// returned even without a store; it then stays empty.
    pub fn build(
        self,
    ) -> (
        AppState,
        Arc<InMemoryWaitlistRepo>,
        Arc<InMemoryWaitlistNotifier>,
    ) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let notifier = Arc::new(InMemoryWaitlistNotifier::new());

        let store: Option<Arc<dyn WaitlistRepo>> = match (self.with_store, self.repo_override) {
            (false, _) => None,
            (true, Some(custom)) => Some(custom),
            (true, None) => Some(repo.clone()),
        };

        let app_state = AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(store, notifier.clone())),
        };

        (app_state, repo, notifier)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        database_url: None,
        database_max_connections: 1,
        email: EmailConfig::default(),
    }
}

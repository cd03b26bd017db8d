//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{TimeZone, Utc};
use uuid::Uuid;
use waitlist_types::JoinWaitlistRequest;

use crate::domain::entities::waitlist_entry::{WaitlistEntry, WaitlistStatus};

/// Create a stored waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        research_interests: "Machine learning for protein design".to_string(),
        status: WaitlistStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
    };
    overrides(&mut entry);
    entry
}

/// Raw form input as the browser would submit it.
pub fn signup_form(name: &str, email: &str, research_interests: &str) -> JoinWaitlistRequest {
    JoinWaitlistRequest {
        name: name.to_string(),
        email: email.to_string(),
        research_interests: research_interests.to_string(),
    }
}

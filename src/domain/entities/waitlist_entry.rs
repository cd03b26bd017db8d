use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Lifecycle status of a waitlist entry. Entries are written once and
/// never transition, so `Pending` is the only state this service creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum WaitlistStatus {
    #[default]
    Pending,
}

/// One person's registration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    /// Normalized (trimmed, lowercase) email; the dedupe key.
    pub email: String,
    pub research_interests: String,
    pub status: WaitlistStatus,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Builds a fresh pending entry stamped with the current time.
    pub fn new_pending(name: String, email: String, research_interests: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            research_interests,
            status: WaitlistStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

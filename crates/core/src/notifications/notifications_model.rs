//! Toast notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Process-unique toast identifier. Assigned from 1 upwards, never reused.
pub type NotificationId = u64;

/// Severity of a toast. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient, user-facing message with a bounded lifetime.
///
/// Notifications are immutable once the store has published them; readers
/// only ever see them through shared snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    /// May be empty.
    pub message: String,
    /// Milliseconds until the toast expires if nobody dismisses it first.
    pub ttl_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

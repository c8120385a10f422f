//! Notification record and draft.

use std::collections::BTreeSet;

use chama_shared::types::{MemberId, NotificationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Urgency of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// General information.
    #[default]
    Info,
    /// Something members should act on.
    Warning,
    /// Needs immediate attention.
    Urgent,
}

impl NotificationKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification being composed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationDraft {
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Urgency, `info` unless chosen.
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
}

/// A notification broadcast to every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier.
    pub id: NotificationId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Urgency.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// When it was sent.
    pub created_at: DateTime<Utc>,
    /// Who sent it.
    pub created_by: MemberId,
    /// Members who have read it.
    #[serde(default)]
    pub read_by: BTreeSet<MemberId>,
}

impl Notification {
    /// Returns true if the member has read this notification.
    #[must_use]
    pub fn is_read_by(&self, member: MemberId) -> bool {
        self.read_by.contains(&member)
    }
}

//! Composing and reading notifications.

use chama_shared::types::{MemberId, NotificationId};
use chrono::Utc;

use super::error::NotificationError;
use super::notification::{Notification, NotificationDraft};
use crate::auth::{Capabilities, Capability};

/// Stateless notification logic.
pub struct NotificationService;

impl NotificationService {
    /// Turns a draft into a notification ready to publish.
    ///
    /// Requires send-notifications. Title and message are trimmed and must
    /// not be blank.
    pub fn compose(
        draft: NotificationDraft,
        author: MemberId,
        actor: &Capabilities,
    ) -> Result<Notification, NotificationError> {
        actor.require(Capability::SendNotifications)?;

        let title = draft.title.trim();
        let message = draft.message.trim();
        if title.is_empty() || message.is_empty() {
            return Err(NotificationError::MissingContent);
        }

        Ok(Notification {
            id: NotificationId::new(),
            title: title.to_string(),
            message: message.to_string(),
            kind: draft.kind,
            created_at: Utc::now(),
            created_by: author,
            read_by: std::collections::BTreeSet::new(),
        })
    }

    /// Notifications for the board, newest first.
    #[must_use]
    pub fn board(notifications: &[Notification]) -> Vec<&Notification> {
        let mut board: Vec<_> = notifications.iter().collect();
        // Stable sort keeps publish order for identical timestamps.
        board.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        board
    }

    /// Marks a notification as read. Returns false if it already was.
    pub fn mark_read(
        notifications: &mut [Notification],
        id: NotificationId,
        member: MemberId,
    ) -> Result<bool, NotificationError> {
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotificationError::NotFound(id))?;
        Ok(notification.read_by.insert(member))
    }

    /// Number of notifications the member has not read.
    #[must_use]
    pub fn unread_count(notifications: &[Notification], member: MemberId) -> usize {
        notifications.iter().filter(|n| !n.is_read_by(member)).count()
    }
}

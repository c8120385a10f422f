//! Notification repository.

use std::sync::Arc;

use chama_core::notifications::{Notification, NotificationError, NotificationService};
use chama_shared::types::{MemberId, NotificationId};
use tokio::sync::RwLock;

/// Notification board backed by a shared vector.
#[derive(Debug, Clone, Default)]
pub struct NotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationRepository {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a composed notification.
    pub async fn publish(&self, notification: Notification) {
        self.notifications.write().await.push(notification);
    }

    /// Every notification in publish order.
    pub async fn all(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    /// The board, newest first.
    pub async fn board(&self) -> Vec<Notification> {
        let notifications = self.notifications.read().await;
        NotificationService::board(&notifications)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Marks a notification as read by a member.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::NotFound` for an unknown id.
    pub async fn mark_read(
        &self,
        id: NotificationId,
        member: MemberId,
    ) -> Result<bool, NotificationError> {
        NotificationService::mark_read(&mut self.notifications.write().await, id, member)
    }

    /// Notifications the member has not read.
    pub async fn unread_count(&self, member: MemberId) -> usize {
        NotificationService::unread_count(&self.notifications.read().await, member)
    }
}

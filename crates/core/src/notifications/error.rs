//! Notification errors.

use chama_shared::AppError;
use chama_shared::types::NotificationId;
use thiserror::Error;

use crate::auth::AuthError;

/// Errors raised while composing or reading notifications.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Title or message left blank.
    #[error("Please fill in both title and message")]
    MissingContent,

    /// No notification has this id.
    #[error("Notification {0} not found")]
    NotFound(NotificationId),

    /// The author may not send notifications.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::MissingContent => Self::Validation(err.to_string()),
            NotificationError::NotFound(_) => Self::NotFound(err.to_string()),
            NotificationError::Auth(auth) => auth.into(),
        }
    }
}

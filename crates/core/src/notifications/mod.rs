//! Group announcements.

pub mod error;
pub mod notification;
pub mod service;

pub use error::NotificationError;
pub use notification::{Notification, NotificationDraft, NotificationKind};
pub use service::NotificationService;

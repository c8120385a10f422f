//! Repository abstractions for data access.
//!
//! Each repository is a cheap handle around a shared collection; clones see
//! the same data. Writes hold the lock for the whole check-then-mutate step.

pub mod member;
pub mod notification;
pub mod transaction;

pub use member::MemberRepository;
pub use notification::NotificationRepository;
pub use transaction::TransactionRepository;

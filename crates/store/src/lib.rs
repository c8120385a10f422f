//! In-memory storage for the group.
//!
//! This crate provides:
//! - Async repositories over `tokio::sync::RwLock` collections
//! - The `CredentialDirectory` and `TransactionSource` seams
//! - Login with optional simulated latency
//! - Demo data seeding
//! - `GroupService`, the entry point the binaries drive

pub mod auth;
pub mod directory;
pub mod repositories;
pub mod seed;
pub mod service;

pub use auth::Authenticator;
pub use directory::{CredentialDirectory, TransactionSource};
pub use repositories::{MemberRepository, NotificationRepository, TransactionRepository};
pub use seed::seed_demo_data;
pub use service::GroupService;

use std::time::Duration;

use chama_shared::config::StoreConfig;

/// Handles to every repository. Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Member directory.
    pub members: MemberRepository,
    /// Group ledger.
    pub transactions: TransactionRepository,
    /// Notification board.
    pub notifications: NotificationRepository,
    latency: Duration,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.simulated_latency_ms),
            ..Self::default()
        }
    }

    /// Delay applied before answering a login.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

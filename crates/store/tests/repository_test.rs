//! Integration tests for the in-memory repositories.

use std::time::{Duration, Instant};

use chama_core::auth::{LoginRequest, PermissionTable, UserRole};
use chama_core::ledger::LedgerScope;
use chama_shared::config::StoreConfig;
use chama_store::{
    Authenticator, CredentialDirectory, Store, TransactionSource, seed_demo_data,
};
use rust_decimal_macros::dec;

fn instant_store() -> Store {
    Store::new(&StoreConfig {
        simulated_latency_ms: 0,
        ..StoreConfig::default()
    })
}

#[tokio::test]
async fn test_seed_populates_demo_group() {
    let store = instant_store();
    seed_demo_data(&store).await.expect("Failed to seed");

    assert_eq!(store.members.active_count().await, 5);
    let transactions = store.transactions.transactions().await;
    assert_eq!(transactions.len(), 5);
    assert_eq!(transactions[0].description, "Monthly contribution - January");

    let summary = store
        .transactions
        .summary(&LedgerScope::All)
        .await
        .expect("Failed to summarize");
    assert_eq!(summary.balance, dec!(27500));
    assert_eq!(summary.approved_count, 4);
    assert_eq!(summary.pending_amount, dec!(5000));
}

#[tokio::test]
async fn test_credential_directory() {
    let store = instant_store();
    seed_demo_data(&store).await.expect("Failed to seed");

    let found = store
        .members
        .find_member_by_credentials("Admin001", "1234")
        .await
        .expect("admin should be found");
    assert_eq!(found.role, UserRole::OverallAdmin);
    assert!(store.members.find_member_by_credentials("admin001", "4321").await.is_none());
}

#[tokio::test]
async fn test_clones_share_data() {
    let store = instant_store();
    let other = store.clone();
    seed_demo_data(&store).await.expect("Failed to seed");
    assert_eq!(other.members.all().await.len(), 5);
}

#[tokio::test]
async fn test_login_applies_simulated_latency() {
    let store = Store::new(&StoreConfig {
        simulated_latency_ms: 50,
        ..StoreConfig::default()
    });
    seed_demo_data(&store).await.expect("Failed to seed");

    let authenticator = Authenticator::new(store.members.clone(), PermissionTable::STANDARD, store.latency());
    let started = Instant::now();
    let session = authenticator
        .login(&LoginRequest::new("mem001", "7890"))
        .await
        .expect("Failed to log in");

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert!(!session.capabilities.is_admin);
}

#[tokio::test]
async fn test_blank_login_skips_lookup_and_latency() {
    let store = Store::new(&StoreConfig {
        simulated_latency_ms: 10_000,
        ..StoreConfig::default()
    });
    let authenticator = Authenticator::new(store.members.clone(), PermissionTable::STANDARD, store.latency());

    let started = Instant::now();
    assert!(authenticator.login(&LoginRequest::new("mem001", " ")).await.is_err());
    assert!(started.elapsed() < Duration::from_secs(5));
}

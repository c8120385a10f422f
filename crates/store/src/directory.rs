//! Seams between the core and whatever holds members and transactions.

use async_trait::async_trait;
use chama_core::ledger::Transaction;
use chama_core::members::Member;

/// Looks members up by login credentials.
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Returns the active member matching the code (any case) and PIN.
    ///
    /// Unknown code, wrong PIN and inactive account all yield `None`.
    async fn find_member_by_credentials(&self, member_code: &str, pin: &str) -> Option<Member>;
}

/// Supplies the ledger.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// All transactions in insertion order.
    async fn transactions(&self) -> Vec<Transaction>;
}

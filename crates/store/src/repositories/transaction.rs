//! Transaction repository.

use std::sync::Arc;

use async_trait::async_trait;
use chama_core::auth::Capabilities;
use chama_core::ledger::{LedgerAggregator, LedgerError, LedgerScope, LedgerSummary, Transaction};
use chama_core::members::Member;
use chama_core::workflow::{FinanceEntry, WorkflowAction, WorkflowError, WorkflowService};
use chama_shared::types::TransactionId;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::directory::TransactionSource;

/// Group ledger backed by a shared vector. Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct TransactionRepository {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl TransactionRepository {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction as-is. Used for seeding.
    pub async fn insert(&self, tx: Transaction) {
        self.transactions.write().await.push(tx);
    }

    /// Summary for a scope, computed from the current ledger.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if the totals leave the decimal range.
    pub async fn summary(&self, scope: &LedgerScope) -> Result<LedgerSummary, LedgerError> {
        LedgerAggregator::aggregate(&self.transactions.read().await, scope)
    }

    /// Transactions whose member name or description matches the term.
    pub async fn search(&self, term: &str) -> Vec<Transaction> {
        let transactions = self.transactions.read().await;
        LedgerAggregator::search(&transactions, term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Records a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not key in finances or the entry is invalid.
    pub async fn record(
        &self,
        entry: FinanceEntry,
        directory: &[Member],
        actor: &Capabilities,
    ) -> Result<Transaction, WorkflowError> {
        let tx = WorkflowService::record(entry, directory, actor)?;
        self.transactions.write().await.push(tx.clone());
        Ok(tx)
    }

    /// Approves a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is unknown, not pending, or the actor may not approve.
    pub async fn approve(
        &self,
        id: TransactionId,
        approved_by: &str,
        actor: &Capabilities,
    ) -> Result<Transaction, WorkflowError> {
        self.transition(id, |tx| WorkflowService::approve(tx, approved_by, actor))
            .await
    }

    /// Rejects a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is unknown, not pending, or the actor may not approve.
    pub async fn reject(
        &self,
        id: TransactionId,
        actor: &Capabilities,
    ) -> Result<Transaction, WorkflowError> {
        self.transition(id, |tx| WorkflowService::reject(tx, actor))
            .await
    }

    /// Changes a transaction's amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is unknown, the amount is invalid, or the actor may not edit.
    pub async fn edit_amount(
        &self,
        id: TransactionId,
        amount: Decimal,
        actor: &Capabilities,
    ) -> Result<Transaction, WorkflowError> {
        self.transition(id, |_| WorkflowService::edit_amount(amount, actor))
            .await
    }

    async fn transition(
        &self,
        id: TransactionId,
        decide: impl FnOnce(&Transaction) -> Result<WorkflowAction, WorkflowError>,
    ) -> Result<Transaction, WorkflowError> {
        let mut transactions = self.transactions.write().await;
        let tx = WorkflowService::require_mut(&mut transactions, id)?;
        decide(&*tx)?.apply(tx);
        Ok(tx.clone())
    }
}

#[async_trait]
impl TransactionSource for TransactionRepository {
    async fn transactions(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}

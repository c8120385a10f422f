//! Balance aggregation over the ledger.
//!
//! Every call recomputes from the slice it is given. Input order matters only
//! for `scoped` and `search`, which preserve it.

use chama_shared::types::MemberCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::transaction::Transaction;
use super::types::TransactionStatus;

/// Which transactions a summary covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "member_code", rename_all = "snake_case")]
pub enum LedgerScope {
    /// The whole group.
    All,
    /// One member, matched case-insensitively on member code.
    Member(MemberCode),
}

impl LedgerScope {
    /// Scope for a single member code.
    #[must_use]
    pub fn member(code: &str) -> Self {
        Self::Member(MemberCode::new(code))
    }

    /// Returns true if the transaction falls inside this scope.
    #[must_use]
    pub fn contains(&self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Member(code) => tx.member_code.matches(code.as_str()),
        }
    }
}

/// Aggregated view of a scope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Signed sum of approved transactions.
    pub balance: Decimal,
    /// Number of approved transactions.
    pub approved_count: usize,
    /// Number of pending transactions.
    pub pending_count: usize,
    /// Sum of pending amounts, unsigned.
    pub pending_amount: Decimal,
    /// Latest posting time among approved transactions.
    pub last_posted: Option<DateTime<Utc>>,
}

impl LedgerSummary {
    /// Returns true if nothing has been approved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.approved_count == 0
    }

    fn add(mut self, tx: &Transaction) -> Result<Self, LedgerError> {
        match tx.status {
            TransactionStatus::Approved => {
                self.balance = self
                    .balance
                    .checked_add(tx.signed_amount())
                    .ok_or(LedgerError::Overflow("balance"))?;
                self.approved_count += 1;
                let posted = tx.posted_at();
                self.last_posted = Some(self.last_posted.map_or(posted, |p| p.max(posted)));
            }
            TransactionStatus::Pending => {
                self.pending_count += 1;
                self.pending_amount = self
                    .pending_amount
                    .checked_add(tx.amount)
                    .ok_or(LedgerError::Overflow("pending amount"))?;
            }
            TransactionStatus::Rejected => {}
        }
        Ok(self)
    }
}

/// Stateless ledger queries.
pub struct LedgerAggregator;

impl LedgerAggregator {
    /// Summarizes the transactions inside `scope`.
    ///
    /// Rejected transactions are ignored entirely. Duplicates are counted
    /// as many times as they appear.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Overflow` if a running total leaves the
    /// `Decimal` range.
    pub fn aggregate(
        transactions: &[Transaction],
        scope: &LedgerScope,
    ) -> Result<LedgerSummary, LedgerError> {
        transactions
            .iter()
            .filter(|tx| scope.contains(tx))
            .try_fold(LedgerSummary::default(), LedgerSummary::add)
    }

    /// Transactions inside `scope`, in input order.
    #[must_use]
    pub fn scoped<'a>(transactions: &'a [Transaction], scope: &LedgerScope) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| scope.contains(tx)).collect()
    }

    /// Case-insensitive substring search on member name or description.
    ///
    /// A blank term returns every transaction.
    #[must_use]
    pub fn search<'a>(transactions: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
        let term = term.trim().to_lowercase();
        transactions
            .iter()
            .filter(|tx| {
                term.is_empty()
                    || tx.member_name.to_lowercase().contains(&term)
                    || tx.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Pending transactions in input order, for the approval queue.
    #[must_use]
    pub fn pending(transactions: &[Transaction]) -> Vec<&Transaction> {
        transactions.iter().filter(|tx| tx.is_pending()).collect()
    }
}

/// Shorthand for [`LedgerAggregator::aggregate`].
pub fn aggregate(
    transactions: &[Transaction],
    scope: &LedgerScope,
) -> Result<LedgerSummary, LedgerError> {
    LedgerAggregator::aggregate(transactions, scope)
}

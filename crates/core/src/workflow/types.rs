//! Workflow domain types.

use chama_shared::types::MemberCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::ledger::{Transaction, TransactionStatus, TransactionType};

/// A finance entry as keyed in by the treasurer.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceEntry {
    /// The member the money belongs to.
    pub member_code: MemberCode,
    /// Positive amount.
    pub amount: Decimal,
    /// Kind of money movement. Defaults to a contribution.
    #[serde(default, rename = "type")]
    pub transaction_type: TransactionType,
    /// Free-text description.
    pub description: String,
}

/// A validated state change with its audit data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Approve a pending transaction.
    Approve {
        /// Name of the approver.
        approved_by: String,
        /// When the transaction was approved.
        approved_at: DateTime<Utc>,
    },
    /// Reject a pending transaction.
    Reject,
    /// Replace the amount.
    EditAmount {
        /// The new positive amount.
        amount: Decimal,
    },
}

impl WorkflowAction {
    /// Status after the action, or `None` if it leaves the status alone.
    #[must_use]
    pub fn new_status(&self) -> Option<TransactionStatus> {
        match self {
            Self::Approve { .. } => Some(TransactionStatus::Approved),
            Self::Reject => Some(TransactionStatus::Rejected),
            Self::EditAmount { .. } => None,
        }
    }

    /// Writes the action into a transaction.
    pub fn apply(self, tx: &mut Transaction) {
        match self {
            Self::Approve {
                approved_by,
                approved_at,
            } => {
                tx.status = TransactionStatus::Approved;
                tx.approved_by = Some(approved_by);
                tx.approved_at = Some(approved_at);
            }
            Self::Reject => tx.status = TransactionStatus::Rejected,
            Self::EditAmount { amount } => tx.amount = amount,
        }
    }
}

//! Ledger transaction record.

use chama_shared::types::{MemberCode, TransactionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{TransactionStatus, TransactionType};

/// A single financial event recorded against a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// The member the money belongs to. Not checked against the directory.
    pub member_code: MemberCode,
    /// Member name at the time of recording.
    pub member_name: String,
    /// Positive amount; the sign comes from `transaction_type`.
    pub amount: Decimal,
    /// Kind of money movement.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Free-text description.
    pub description: String,
    /// Approval status.
    pub status: TransactionStatus,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
    /// Name of the approver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// When the transaction was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Amount with its balance sign: contributions positive, everything else negative.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        if self.transaction_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// When the transaction hit the books: approval time, else creation time.
    #[must_use]
    pub fn posted_at(&self) -> DateTime<Utc> {
        self.approved_at.unwrap_or(self.created_at)
    }

    /// Returns true if the transaction counts toward balances.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == TransactionStatus::Approved
    }

    /// Returns true if the transaction is waiting for a decision.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

#[cfg(test)]
impl Transaction {
    /// Builds a transaction with fixed timestamps for tests.
    pub(crate) fn fixture(
        member_code: &str,
        amount: Decimal,
        transaction_type: TransactionType,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            member_code: MemberCode::new(member_code),
            member_name: format!("Member {member_code}"),
            amount,
            transaction_type,
            description: "Monthly contribution".to_string(),
            status,
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_default(),
            approved_by: None,
            approved_at: None,
        }
    }
}

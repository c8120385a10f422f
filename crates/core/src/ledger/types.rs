//! Ledger domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of money movement a transaction records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money paid in by a member.
    #[default]
    Contribution,
    /// Money paid out to a member.
    Withdrawal,
    /// Group expense.
    Expense,
    /// Loan issued to a member.
    Loan,
}

impl TransactionType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contribution => "contribution",
            Self::Withdrawal => "withdrawal",
            Self::Expense => "expense",
            Self::Loan => "loan",
        }
    }

    /// Parses a type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "contribution" => Some(Self::Contribution),
            "withdrawal" => Some(Self::Withdrawal),
            "expense" => Some(Self::Expense),
            "loan" => Some(Self::Loan),
            _ => None,
        }
    }

    /// Only contributions add to a balance; every other type subtracts.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Contribution)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approval status of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Recorded, awaiting approval.
    #[default]
    Pending,
    /// Approved; counts toward balances.
    Approved,
    /// Rejected; ignored by every total.
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true once approval has been decided either way.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

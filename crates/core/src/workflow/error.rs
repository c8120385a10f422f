//! Workflow error types.

use chama_shared::AppError;
use chama_shared::types::{MemberCode, TransactionId};
use thiserror::Error;

use crate::auth::AuthError;
use crate::ledger::TransactionStatus;

/// Errors that can occur while recording or transitioning transactions.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A required field was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: TransactionStatus,
        /// The attempted target status.
        to: TransactionStatus,
    },

    /// The entry names a member that is not in the directory or is inactive.
    #[error("Member {0} not found")]
    MemberNotFound(MemberCode),

    /// Transaction not found.
    #[error("Transaction {0} not found")]
    TransactionNotFound(TransactionId),

    /// The actor lacks the required capability.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl WorkflowError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::MemberNotFound(_) => "MEMBER_NOT_FOUND",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::Auth(AuthError::Forbidden { .. } | AuthError::AdminOnly { .. }) => "FORBIDDEN",
            Self::Auth(_) => "AUTH_ERROR",
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Validation(msg) => Self::Validation(msg),
            WorkflowError::InvalidTransition { .. } => Self::BusinessRule(err.to_string()),
            WorkflowError::MemberNotFound(_) | WorkflowError::TransactionNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            WorkflowError::Auth(auth) => auth.into(),
        }
    }
}

//! Ledger error types.

use chama_shared::AppError;
use thiserror::Error;

/// Errors that can occur while aggregating the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A running total left the representable decimal range.
    #[error("Ledger {0} exceeds the supported range")]
    Overflow(&'static str),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow(_) => "LEDGER_OVERFLOW",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

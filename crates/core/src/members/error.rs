//! Member management errors.

use chama_shared::AppError;
use chama_shared::types::MemberCode;
use thiserror::Error;

use crate::auth::AuthError;

/// Errors raised by registration and member administration.
#[derive(Debug, Error)]
pub enum MemberError {
    /// A required field was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// No member has this code.
    #[error("Member {0} not found")]
    NotFound(MemberCode),

    /// Another member already uses this national ID number.
    #[error("A member with ID number {0} is already registered")]
    DuplicateIdNumber(String),

    /// Every code for this name prefix is taken.
    #[error("No free member code left for prefix {0}")]
    CodeSpaceExhausted(String),

    /// Capability check or PIN hashing failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<MemberError> for AppError {
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::Validation(msg) => Self::Validation(msg),
            MemberError::NotFound(_) => Self::NotFound(err.to_string()),
            MemberError::DuplicateIdNumber(_) => Self::Conflict(err.to_string()),
            MemberError::CodeSpaceExhausted(_) => Self::Internal(err.to_string()),
            MemberError::Auth(auth) => auth.into(),
        }
    }
}

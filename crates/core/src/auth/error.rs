//! Authentication and authorization errors.

use chama_shared::AppError;
use thiserror::Error;

use super::permissions::Capability;
use super::pin::PinError;
use super::role::UserRole;

/// Errors raised while logging in or checking capabilities.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Member code or PIN was left blank.
    #[error("Please enter both Member ID and PIN")]
    MissingCredentials,

    /// No active member matches the credentials.
    ///
    /// Deliberately does not say whether the code, the PIN or the account
    /// status was the problem.
    #[error("Invalid Member ID or PIN")]
    InvalidCredentials,

    /// The role does not grant the capability.
    #[error("{role} is not allowed to {capability}")]
    Forbidden {
        /// The caller's role.
        role: UserRole,
        /// The capability that was required.
        capability: Capability,
    },

    /// The view is reserved for committee roles.
    #[error("{role} is not allowed to open the group ledger")]
    AdminOnly {
        /// The caller's role.
        role: UserRole,
    },

    /// PIN hashing failed.
    #[error(transparent)]
    Pin(#[from] PinError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::Validation(err.to_string()),
            AuthError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AuthError::Forbidden { .. } | AuthError::AdminOnly { .. } => {
                Self::Forbidden(err.to_string())
            }
            AuthError::Pin(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_maps_to_unauthorized() {
        let err: AppError = AuthError::InvalidCredentials.into();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
        assert_eq!(err.to_string(), "Authentication failed: Invalid Member ID or PIN");
    }

    #[test]
    fn test_missing_credentials_maps_to_validation() {
        let err: AppError = AuthError::MissingCredentials.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_forbidden_message() {
        let err = AuthError::Forbidden {
            role: UserRole::Secretary,
            capability: Capability::ApproveTransactions,
        };
        assert_eq!(err.to_string(), "secretary is not allowed to approve transactions");
        let err: AppError = err.into();
        assert_eq!(err.error_code(), "FORBIDDEN");
    }

    #[test]
    fn test_admin_only_maps_to_forbidden() {
        let err = AuthError::AdminOnly {
            role: UserRole::Member,
        };
        assert_eq!(err.to_string(), "member is not allowed to open the group ledger");
        assert_eq!(AppError::from(err).error_code(), "FORBIDDEN");
    }
}

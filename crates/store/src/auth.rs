//! Login against a credential directory.

use std::time::Duration;

use chama_core::auth::{AuthError, LoginRequest, PermissionTable, Session};
use tracing::{info, warn};

use crate::directory::CredentialDirectory;

/// Turns credentials into a session.
#[derive(Debug, Clone)]
pub struct Authenticator<D> {
    directory: D,
    table: PermissionTable,
    latency: Duration,
}

impl<D: CredentialDirectory> Authenticator<D> {
    /// Creates an authenticator. A zero latency answers immediately.
    #[must_use]
    pub const fn new(directory: D, table: PermissionTable, latency: Duration) -> Self {
        Self {
            directory,
            table,
            latency,
        }
    }

    /// Logs a member in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` for blank fields and
    /// `AuthError::InvalidCredentials` for anything that does not match an
    /// active member.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        request.validate()?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let member_code = request.member_code.trim();
        let Some(member) = self
            .directory
            .find_member_by_credentials(member_code, &request.pin)
            .await
        else {
            warn!(member_code, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        info!(member_code = %member.member_code, role = %member.role, "Login succeeded");
        Ok(Session::start(member, &self.table))
    }
}

//! Login requests and sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::permissions::{Capabilities, PermissionTable};
use crate::members::Member;

/// Credentials as typed on the login screen.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Member code, any case.
    pub member_code: String,
    /// Numeric PIN.
    pub pin: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(member_code: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            member_code: member_code.into(),
            pin: pin.into(),
        }
    }

    /// Rejects blank fields before any lookup happens.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.member_code.trim().is_empty() || self.pin.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

/// An authenticated member and what they may do.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// The logged-in member.
    pub member: Member,
    /// Capabilities resolved from the member's role at login.
    pub capabilities: Capabilities,
    /// When the session started.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session, resolving capabilities from the member's role.
    #[must_use]
    pub fn start(member: Member, table: &PermissionTable) -> Self {
        let capabilities = table.capabilities(member.role);
        Self {
            member,
            capabilities,
            started_at: Utc::now(),
        }
    }

    /// Capabilities of an optional session; logged out means least privilege.
    #[must_use]
    pub fn capabilities_of(session: Option<&Self>, table: &PermissionTable) -> Capabilities {
        session.map_or_else(|| Capabilities::anonymous(table), |s| s.capabilities)
    }
}

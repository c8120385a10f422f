//! Member record.

use chama_shared::types::{MemberCode, MemberId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::UserRole;

/// A registered member of the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Internal key.
    pub id: MemberId,
    /// Login handle, unique across the group.
    pub member_code: MemberCode,
    /// Full name.
    pub name: String,
    /// National ID number.
    pub id_number: String,
    /// Phone number.
    pub phone_number: String,
    /// Argon2id hash of the PIN.
    #[serde(skip_serializing, default)]
    pub pin_hash: String,
    /// Role within the group.
    pub role: UserRole,
    /// Reference to the uploaded passport photo, if any.
    pub passport_photo: Option<String>,
    /// Reference to the uploaded ID document photo, if any.
    pub document_photo: Option<String>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// False once the member has been removed.
    pub is_active: bool,
}

impl Member {
    /// First word of the member's name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Editable member details. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberUpdate {
    /// New full name.
    pub name: Option<String>,
    /// New national ID number.
    pub id_number: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
}

impl MemberUpdate {
    /// Returns true if nothing would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id_number.is_none() && self.phone_number.is_none()
    }
}

#[cfg(test)]
impl Member {
    /// Builds an active member with a placeholder PIN hash.
    pub(crate) fn fixture(code: &str, name: &str, role: UserRole) -> Self {
        Self {
            id: MemberId::new(),
            member_code: MemberCode::new(code),
            name: name.to_string(),
            id_number: "00000000".to_string(),
            phone_number: "0700000000".to_string(),
            pin_hash: String::new(),
            role,
            passport_photo: None,
            document_photo: None,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

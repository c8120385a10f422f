//! Typed IDs for type-safe entity references.
//!
//! Internal keys are UUIDs. The member code is the separate, human-facing
//! login handle that members type in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(MemberId, "Internal identifier for a group member.");
typed_id!(TransactionId, "Unique identifier for a ledger transaction.");
typed_id!(NotificationId, "Unique identifier for a broadcast notification.");

/// Human-facing member handle used to log in (e.g. `mem001`).
///
/// Codes are stored trimmed and lowercased, so equality is
/// case-insensitive with respect to what the member typed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MemberCode(String);

impl MemberCode {
    /// Creates a member code, normalizing case and surrounding whitespace.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_lowercase())
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `input` names this member, ignoring case.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input.trim().to_lowercase()
    }

    /// Returns true if the code is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for MemberCode {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for MemberCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<MemberCode> for String {
    fn from(value: MemberCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for MemberCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

//! Member registration.

use chama_shared::types::MemberCode;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::MemberError;
use super::member::Member;
use crate::auth::UserRole;

/// Prefix used when a name has no usable characters.
const FALLBACK_PREFIX: &str = "mem";

/// Registration form as filled in by a secretary or admin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    /// Full name.
    pub name: String,
    /// National ID number.
    pub id_number: String,
    /// Phone number.
    pub phone_number: String,
    /// Role to assign. Defaults to `member`.
    #[serde(default)]
    pub role: UserRole,
    /// Reference to an uploaded passport photo.
    #[serde(default)]
    pub passport_photo: Option<String>,
    /// Reference to an uploaded ID document photo.
    #[serde(default)]
    pub document_photo: Option<String>,
}

impl RegistrationForm {
    /// Checks that name, ID number and phone number are filled in.
    pub fn validate(&self) -> Result<(), MemberError> {
        if self.name.trim().is_empty()
            || self.id_number.trim().is_empty()
            || self.phone_number.trim().is_empty()
        {
            return Err(MemberError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a successful registration.
///
/// The temporary PIN is only available here; the stored member keeps the hash.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// The newly registered member.
    pub member: Member,
    /// Temporary PIN to hand to the member.
    pub temporary_pin: String,
}

/// Lowercased first `len` letters or digits of a name.
#[must_use]
pub fn code_prefix(name: &str, len: usize) -> String {
    let prefix: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(len)
        .collect::<String>()
        .to_lowercase();

    if prefix.is_empty() {
        FALLBACK_PREFIX.to_string()
    } else {
        prefix
    }
}

/// Picks a free member code: the name prefix followed by a number in `100..=999`.
///
/// Random picks are tried first; if they keep colliding the remaining
/// numbers are scanned in order.
pub fn generate_member_code(
    name: &str,
    prefix_len: usize,
    is_taken: impl Fn(&MemberCode) -> bool,
) -> Result<MemberCode, MemberError> {
    let prefix = code_prefix(name, prefix_len);
    let mut rng = rand::rng();

    for _ in 0..32 {
        let candidate = MemberCode::new(&format!("{prefix}{}", rng.random_range(100..=999)));
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }

    (100..=999)
        .map(|n| MemberCode::new(&format!("{prefix}{n}")))
        .find(|candidate| !is_taken(candidate))
        .ok_or(MemberError::CodeSpaceExhausted(prefix))
}

//! Member PINs.
//!
//! A PIN is four digits by default, so the Argon2id hash is the only thing
//! standing between a leaked member list and every account. Plaintext PINs
//! exist only in a registration or reset response.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHash};
use rand::Rng;
use thiserror::Error;

/// Failures while storing or checking a PIN.
#[derive(Debug, Error)]
pub enum PinError {
    /// Argon2 could not produce a hash.
    #[error("could not secure PIN: {0}")]
    HashError(String),

    /// Argon2 failed for a reason other than a mismatch.
    #[error("could not check PIN: {0}")]
    VerifyError(String),

    /// The stored value is not a PHC string.
    #[error("stored PIN hash is unreadable")]
    InvalidHash,
}

/// Salts and hashes a PIN into a PHC string (`$argon2id$...`).
///
/// # Errors
///
/// `PinError::HashError` if Argon2 rejects the input.
pub fn hash_pin(pin: &str) -> Result<String, PinError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PinError::HashError(e.to_string()))
}

/// Checks a PIN against its stored hash. A wrong PIN is `Ok(false)`.
///
/// # Errors
///
/// `PinError::InvalidHash` for a malformed stored value, `PinError::VerifyError`
/// for any other Argon2 failure.
pub fn verify_pin(pin: &str, stored: &str) -> Result<bool, PinError> {
    let stored = PasswordHash::new(stored).map_err(|_| PinError::InvalidHash)?;
    match Argon2::default().verify_password(pin.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PinError::VerifyError(e.to_string())),
    }
}

/// Generates a random numeric PIN with exactly `digits` digits.
///
/// The first digit is never zero. `digits` is clamped to `1..=9`.
#[must_use]
pub fn generate_pin(digits: u32) -> String {
    let digits = digits.clamp(1, 9);
    let lower = if digits == 1 { 0 } else { 10u32.pow(digits - 1) };
    let upper = 10u32.pow(digits);
    rand::rng().random_range(lower..upper).to_string()
}

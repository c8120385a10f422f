//! Authentication and authorization.
//!
//! This module provides:
//! - The closed set of group roles
//! - The static role to permission table and the `Capabilities` value object
//! - PIN hashing with Argon2id and temporary PIN generation
//! - Login sessions

mod error;
mod permissions;
mod pin;
mod role;
mod session;

#[cfg(test)]
mod permissions_props;

pub use error::AuthError;
pub use permissions::{Capabilities, Capability, PermissionSet, PermissionTable, resolve};
pub use pin::{PinError, generate_pin, hash_pin, verify_pin};
pub use role::UserRole;
pub use session::{LoginRequest, Session};

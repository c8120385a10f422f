//! Group membership.
//!
//! This module provides:
//! - The `Member` record (credentials kept only as a PIN hash)
//! - Registration forms and credential generation
//! - `MemberService` for credential lookup and admin actions
//!
//! Members are never deleted; deactivation is a soft delete.

pub mod error;
pub mod member;
pub mod registration;
pub mod service;

pub use error::MemberError;
pub use member::{Member, MemberUpdate};
pub use registration::{Registration, RegistrationForm};
pub use service::MemberService;

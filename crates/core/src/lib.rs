//! Core business logic for Chama.
//!
//! This crate contains pure business logic with ZERO storage or runtime dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Roles, permission table, PINs and sessions
//! - `members` - Member directory and registration
//! - `ledger` - Transactions and balance aggregation
//! - `workflow` - Recording, approving and editing transactions
//! - `notifications` - Group announcements
//! - `calculator` - Keypad calculator
//! - `dashboard` - Admin and member dashboards

pub mod auth;
pub mod calculator;
pub mod dashboard;
pub mod ledger;
pub mod members;
pub mod notifications;
pub mod workflow;

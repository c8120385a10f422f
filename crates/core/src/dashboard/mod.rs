//! Dashboard views.
//!
//! This module provides:
//! - The admin dashboard, gated tab by tab on capabilities
//! - The member dashboard, scoped to the logged-in member

pub mod service;
pub mod types;

pub use service::{DashboardContext, DashboardService};
pub use types::*;

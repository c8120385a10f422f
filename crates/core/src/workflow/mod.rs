//! Transaction workflow.
//!
//! # Modules
//!
//! - `types` - Finance entries and workflow actions
//! - `error` - Workflow-specific error types
//! - `service` - Recording and state transitions
//!
//! Transitions are validated here and returned as `WorkflowAction` values;
//! callers apply them to the stored transaction.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{FinanceEntry, WorkflowAction};

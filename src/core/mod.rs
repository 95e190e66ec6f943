//! Core types of a validation chain.
//!
//! - Error records returned to callers
//! - Faults raised by fallible callbacks
//! - The operation variants and how a single one runs, with the shared
//!   per-sequence context passed in explicitly

pub(crate) mod context;
mod error;
pub(crate) mod operation;
pub mod record;

pub use error::{BoxError, ChainError};
pub use record::{into_validation, ValidationError};

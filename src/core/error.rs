//! Faults that abort a validation pass.

use thiserror::Error;

/// Error type accepted from fallible validators and sanitizers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by callbacks while a chain is packing.
///
/// These are distinct from validation failures: a pack that returns
/// `ChainError` produced no error list at all.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Validator for property '{property}' failed: {source}")]
    PredicateFailed { property: String, source: BoxError },

    #[error("Sanitizer for property '{property}' failed: {source}")]
    SanitizerFailed { property: String, source: BoxError },
}

impl ChainError {
    /// Name of the property whose callback failed.
    pub fn property(&self) -> &str {
        match self {
            Self::PredicateFailed { property, .. } | Self::SanitizerFailed { property, .. } => {
                property
            }
        }
    }
}

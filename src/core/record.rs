//! Error records produced by a validation pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A failed property and the message attached to its failure.
///
/// Records are produced by [`ValidationChain::pack`](crate::ValidationChain::pack),
/// at most one per `check`, in the order the checks were declared.
///
/// # Example
///
/// ```rust
/// use chainer::ValidationError;
///
/// let error = ValidationError::new("status", "Why are you not happy");
///
/// assert_eq!(error.property, "status");
/// assert_eq!(error.to_string(), "status: Why are you not happy");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name the property was checked under
    pub property: String,
    /// Message of the operation that failed
    pub message: String,
}

impl ValidationError {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}

/// Fold a list of records into a stillwater `Validation`.
///
/// An empty list is a success; otherwise every record is accumulated
/// into the failure, preserving order.
pub fn into_validation(errors: Vec<ValidationError>) -> Validation<(), NonEmptyVec<ValidationError>> {
    let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = errors
        .into_iter()
        .map(|error| Validation::fail(error))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

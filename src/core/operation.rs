//! Operations recorded against a property, and how a single one runs.
//!
//! Callbacks are erased over the field type when they are attached, so a
//! sequence only needs to know the target type `T`. The shared
//! [`ChainContext`] is passed in explicitly rather than captured.

use super::context::ChainContext;
use super::error::{BoxError, ChainError};
use super::record::ValidationError;
use std::future::Future;
use std::pin::Pin;

pub(crate) type BoxFuture<R> = Pin<Box<dyn Future<Output = R> + Send>>;

/// Writes a sanitized value back into the target.
pub(crate) type Apply<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Wrap an already available value as a boxed future.
pub(crate) fn settled<R: Send + 'static>(value: R) -> BoxFuture<R> {
    Box::pin(std::future::ready(value))
}

pub(crate) type Predicate<T> =
    Box<dyn Fn(&mut T) -> BoxFuture<Result<bool, BoxError>> + Send + Sync>;

pub(crate) type Transform<T> =
    Box<dyn Fn(&mut T) -> BoxFuture<Result<Apply<T>, BoxError>> + Send + Sync>;

/// Operations started by one `check`, in the order they were attached.
pub(crate) type Sequence<T> = Vec<Operation<T>>;

/// Result of running one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Passed,
    Failed,
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

pub(crate) enum Operation<T> {
    /// First entry of every sequence
    Select { property: String },

    Validate {
        predicate: Predicate<T>,
        message: Option<String>,
    },

    Sanitize { transform: Transform<T> },

    /// Fails when `property` already has a recorded error in this pass
    Ensure {
        property: String,
        message: Option<String>,
    },
}

impl<T: 'static> Operation<T> {
    pub(crate) fn validator<F>(predicate: F, message: Option<String>) -> Self
    where
        F: Fn(&mut T) -> BoxFuture<Result<bool, BoxError>> + Send + Sync + 'static,
    {
        Operation::Validate {
            predicate: Box::new(predicate),
            message,
        }
    }

    pub(crate) fn sanitizer<F>(transform: F) -> Self
    where
        F: Fn(&mut T) -> BoxFuture<Result<Apply<T>, BoxError>> + Send + Sync + 'static,
    {
        Operation::Sanitize {
            transform: Box::new(transform),
        }
    }
}

impl<T> Operation<T> {
    /// Run against the target. Only validators and sanitizers suspend.
    pub(crate) async fn run(
        &self,
        target: &mut T,
        context: &mut ChainContext,
        errors: &[ValidationError],
    ) -> Result<Outcome, ChainError> {
        match self {
            Operation::Select { property } => {
                *context = ChainContext::select(property.clone());
                Ok(Outcome::Passed)
            }
            Operation::Validate { predicate, message } => {
                let passed =
                    predicate(target)
                        .await
                        .map_err(|source| ChainError::PredicateFailed {
                            property: context.property().to_string(),
                            source,
                        })?;
                context.set_pending_message(message.clone());
                Ok(Outcome::from(passed))
            }
            Operation::Sanitize { transform } => {
                let apply =
                    transform(target)
                        .await
                        .map_err(|source| ChainError::SanitizerFailed {
                            property: context.property().to_string(),
                            source,
                        })?;
                apply(target);
                Ok(Outcome::Passed)
            }
            Operation::Ensure { property, message } => {
                match errors.iter().find(|error| error.property == *property) {
                    Some(failed) => {
                        let message = message.clone().unwrap_or_else(|| failed.message.clone());
                        context.set_pending_message(Some(message));
                        Ok(Outcome::Failed)
                    }
                    None => Ok(Outcome::Passed),
                }
            }
        }
    }
}

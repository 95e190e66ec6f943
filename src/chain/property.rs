//! Operations attached to the property selected by the last `check`.

use super::{Lens, ValidationChain};
use crate::core::operation::{settled, Apply, BoxFuture, Operation};
use crate::core::{BoxError, ChainError, ValidationError};
use std::future::Future;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A [`ValidationChain`] with a selected property of type `V`.
///
/// Returned by `check`. Every method here appends to the sequence that
/// `check` started, so an operation can never be attached without a
/// selected property.
pub struct PropertyChain<'a, T, V> {
    chain: ValidationChain<'a, T>,
    index: usize,
    lens: Lens<T, V>,
}

impl<'a, T: 'static, V: 'static> PropertyChain<'a, T, V> {
    pub(crate) fn new(chain: ValidationChain<'a, T>, index: usize, lens: Lens<T, V>) -> Self {
        Self {
            chain,
            index,
            lens,
        }
    }

    /// Close this sequence and start one for another property.
    pub fn check<W, L>(self, property: impl Into<String>, lens: L) -> PropertyChain<'a, T, W>
    where
        W: 'static,
        L: Fn(&mut T) -> &mut W + Send + Sync + 'static,
    {
        self.chain.check(property, lens)
    }

    /// Fail the property with `message` when `predicate` returns false.
    ///
    /// The predicate sees the value as it is when the operation runs, after
    /// any earlier sanitizers. Once it fails, nothing after it in this
    /// sequence runs.
    pub fn validate<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.push_validator(predicate, Some(message.into()))
    }

    /// Like [`validate`](Self::validate) but without a message.
    ///
    /// A failure still stops the sequence, but no error record is produced.
    /// Stopping is deliberate: operations after a silent failure never run.
    pub fn validate_silent<F>(self, predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.push_validator(predicate, None)
    }

    /// Validate with an asynchronous predicate over a clone of the value.
    pub fn validate_async<F, Fut>(self, predicate: F, message: impl Into<String>) -> Self
    where
        V: Clone,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.try_validate(
            move |value| {
                let pending = predicate(value);
                async move { Ok::<bool, BoxError>(pending.await) }
            },
            message,
        )
    }

    /// Validate with a fallible asynchronous predicate.
    ///
    /// An `Err` aborts the whole pack with [`ChainError::PredicateFailed`].
    pub fn try_validate<F, Fut, E>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        V: Clone,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let lens = Arc::clone(&self.lens);
        let operation = Operation::validator(
            move |target: &mut T| {
                let pending = predicate(lens(target).clone());
                let future: BoxFuture<Result<bool, BoxError>> = Box::pin(async move {
                    let passed: Result<bool, BoxError> = pending.await.map_err(Into::into);
                    passed
                });
                future
            },
            Some(message.into()),
        );
        self.push(operation);
        self
    }

    /// Replace the value with whatever `transform` returns.
    ///
    /// Sanitizers never fail the property.
    pub fn sanitize<F>(mut self, transform: F) -> Self
    where
        V: Send,
        F: Fn(&V) -> V + Send + Sync + 'static,
    {
        let lens = Arc::clone(&self.lens);
        let operation = Operation::sanitizer(move |target: &mut T| {
            let value = transform(&*lens(target));
            settled(Ok(write_back(&lens, value)))
        });
        self.push(operation);
        self
    }

    /// Sanitize with an asynchronous transform over a clone of the value.
    pub fn sanitize_async<F, Fut>(self, transform: F) -> Self
    where
        V: Clone + Send,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        self.try_sanitize(move |value| {
            let pending = transform(value);
            async move { Ok::<V, BoxError>(pending.await) }
        })
    }

    /// Sanitize with a fallible asynchronous transform.
    ///
    /// An `Err` aborts the whole pack with [`ChainError::SanitizerFailed`]
    /// and leaves the value untouched.
    pub fn try_sanitize<F, Fut, E>(mut self, transform: F) -> Self
    where
        V: Clone + Send,
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let lens = Arc::clone(&self.lens);
        let operation = Operation::sanitizer(move |target: &mut T| {
            let pending = transform(lens(target).clone());
            let lens = Arc::clone(&lens);
            let future: BoxFuture<Result<Apply<T>, BoxError>> = Box::pin(async move {
                let value: Result<V, BoxError> = pending.await.map_err(Into::into);
                value.map(|value| write_back(&lens, value))
            });
            future
        });
        self.push(operation);
        self
    }

    /// Fail this property, with the other property's own message, if
    /// `property` was checked earlier in the chain and failed.
    ///
    /// Properties checked later have not run yet, so they never trip this.
    pub fn ensure(mut self, property: impl Into<String>) -> Self {
        self.push(Operation::Ensure {
            property: property.into(),
            message: None,
        });
        self
    }

    /// Like [`ensure`](Self::ensure) but reports `message` instead.
    pub fn ensure_with_message(
        mut self,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.push(Operation::Ensure {
            property: property.into(),
            message: Some(message.into()),
        });
        self
    }

    /// See [`ValidationChain::pack`].
    pub async fn pack(&mut self) -> Result<Vec<ValidationError>, ChainError> {
        self.chain.pack().await
    }

    /// See [`ValidationChain::pack_validation`].
    pub async fn pack_validation(
        &mut self,
    ) -> Result<Validation<(), NonEmptyVec<ValidationError>>, ChainError> {
        self.chain.pack_validation().await
    }

    pub fn errors(&self) -> Option<&[ValidationError]> {
        self.chain.errors()
    }

    /// Stop declaring and hand back the chain.
    pub fn done(self) -> ValidationChain<'a, T> {
        self.chain
    }

    fn push_validator<F>(mut self, predicate: F, message: Option<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let lens = Arc::clone(&self.lens);
        let operation = Operation::validator(
            move |target: &mut T| settled(Ok(predicate(&*lens(target)))),
            message,
        );
        self.push(operation);
        self
    }

    fn push(&mut self, operation: Operation<T>) {
        self.chain.push(self.index, operation);
    }
}

fn write_back<T: 'static, V: Send + 'static>(lens: &Lens<T, V>, value: V) -> Apply<T> {
    let lens = Arc::clone(lens);
    Box::new(move |target: &mut T| *lens(target) = value)
}

//! Fluent chain for declaring and running property validations.
//!
//! A chain borrows the target mutably, records one sequence per
//! [`check`](ValidationChain::check), and runs them all when
//! [`pack`](ValidationChain::pack) is awaited.

mod executor;
mod property;

pub use property::PropertyChain;

use crate::core::operation::{Operation, Sequence};
use crate::core::record::into_validation;
use crate::core::{ChainError, ValidationError};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Projects a target onto one of its properties.
pub(crate) type Lens<T, V> = Arc<dyn Fn(&mut T) -> &mut V + Send + Sync>;

/// Validation chain bound to one target object.
///
/// Created with [`start_chain`](crate::start_chain). Declaration calls only
/// record operations; nothing runs until [`pack`](Self::pack).
///
/// The target type must be `'static`; callbacks are boxed as
/// `dyn Fn(&mut T)` objects.
pub struct ValidationChain<'a, T> {
    target: &'a mut T,
    sequences: Vec<Sequence<T>>,
    errors: Option<Vec<ValidationError>>,
}

impl<'a, T: 'static> ValidationChain<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target,
            sequences: Vec::new(),
            errors: None,
        }
    }

    /// Start a new sequence for a property.
    ///
    /// `property` is the name reported in error records; `lens` projects
    /// the target onto the field. Every operation attached afterwards
    /// belongs to this sequence until the next `check`.
    pub fn check<V, L>(mut self, property: impl Into<String>, lens: L) -> PropertyChain<'a, T, V>
    where
        V: 'static,
        L: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        let property = property.into();
        self.sequences.push(vec![Operation::Select { property }]);
        let index = self.sequences.len() - 1;

        PropertyChain::new(self, index, Arc::new(lens))
    }

    /// Run every sequence and return the error records.
    ///
    /// Each call re-runs everything, sanitizers included.
    pub async fn pack(&mut self) -> Result<Vec<ValidationError>, ChainError> {
        self.errors = None;
        let errors = executor::run_sequences(&self.sequences, &mut *self.target).await?;
        self.errors = Some(errors.clone());
        Ok(errors)
    }

    /// Run the chain and fold its records into a stillwater `Validation`.
    pub async fn pack_validation(
        &mut self,
    ) -> Result<Validation<(), NonEmptyVec<ValidationError>>, ChainError> {
        let errors = self.pack().await?;
        Ok(into_validation(errors))
    }

    /// Records from the last completed pack.
    pub fn errors(&self) -> Option<&[ValidationError]> {
        self.errors.as_deref()
    }

    /// Number of declared sequences.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub(crate) fn push(&mut self, index: usize, operation: Operation<T>) {
        self.sequences[index].push(operation);
    }
}

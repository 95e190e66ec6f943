//! Runs declared sequences against the target and collects error records.

use crate::core::context::ChainContext;
use crate::core::operation::{Outcome, Sequence};
use crate::core::{ChainError, ValidationError};
use log::{debug, trace};

/// Execute every sequence in declaration order.
///
/// A sequence stops at its first failing operation; the failure is recorded
/// only when a pending message is present. A callback fault aborts the pass
/// and no list is returned.
pub(crate) async fn run_sequences<T>(
    sequences: &[Sequence<T>],
    target: &mut T,
) -> Result<Vec<ValidationError>, ChainError> {
    debug!("packing {} sequence(s)", sequences.len());

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut context = ChainContext::default();

    for sequence in sequences {
        for operation in sequence {
            if operation.run(target, &mut context, &errors).await? == Outcome::Passed {
                continue;
            }

            match context.pending_message() {
                Some(message) => {
                    debug!("property '{}' failed: {}", context.property(), message);
                    errors.push(ValidationError::new(context.property(), message));
                }
                None => trace!("property '{}' failed silently", context.property()),
            }
            break;
        }
        trace!("finished sequence for property '{}'", context.property());
    }

    debug!("pack finished with {} error(s)", errors.len());
    Ok(errors)
}

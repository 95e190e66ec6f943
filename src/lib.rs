//! Chainer: fluent, property-scoped validation for a single object.
//!
//! A chain borrows the object under validation, records per-property
//! sequences of validators, sanitizers and dependency guards, then runs them
//! in declaration order when packed.
//!
//! # Core Concepts
//!
//! - **Sequence**: everything attached after one `check`, up to the next
//! - **Short-circuit**: the first failing operation ends its sequence, so a
//!   property yields at most one error
//! - **Ensure**: fail a property because an earlier-checked property failed
//! - **Sanitize**: rewrite a field in place; later operations see the new value
//!
//! # Example
//!
//! ```rust
//! use chainer::start_chain;
//!
//! struct Login {
//!     username: String,
//!     password: String,
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), chainer::ChainError> {
//! let mut login = Login {
//!     username: "  Henry ".to_string(),
//!     password: "hunter2".to_string(),
//! };
//!
//! let errors = start_chain(&mut login)
//!     .check("username", |l: &mut Login| &mut l.username)
//!     .sanitize(|name| name.trim().to_string())
//!     .validate(|name| name == "Henro", "Username does not exist")
//!     .check("password", |l: &mut Login| &mut l.password)
//!     .ensure_with_message("username", "Username is invalid")
//!     .validate(|password| password.len() >= 12, "Password is too short")
//!     .pack()
//!     .await?;
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1].message, "Username is invalid");
//! assert_eq!(login.username, "Henry");
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod core;

// Re-export commonly used types
pub use crate::chain::{PropertyChain, ValidationChain};
pub use crate::core::{BoxError, ChainError, ValidationError};

/// Start a validation chain over `target`.
///
/// Sanitizers write into `target`; the changes are visible through the
/// caller's own binding once the chain is dropped.
///
/// `T` must be `'static` because callbacks are stored as boxed trait
/// objects over `T`. Targets that borrow data, such as
/// `struct Form<'r> { name: &'r str }`, need to be converted to an owned
/// form first.
pub fn start_chain<T: 'static>(target: &mut T) -> ValidationChain<'_, T> {
    ValidationChain::new(target)
}

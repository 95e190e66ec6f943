//! Signup Form Validation
//!
//! This example validates a signup form the way a request handler would
//! before persisting it.
//!
//! Key concepts:
//! - Sanitizers normalize fields in place before validators see them
//! - The first failing validator ends that field's checks
//! - `ensure` fails a field because an earlier field failed
//! - Async predicates are awaited in declaration order
//!
//! Run with: cargo run --example signup_form

use chainer::{start_chain, ChainError};
use std::time::Duration;

#[derive(Debug)]
struct Signup {
    email: String,
    password: String,
    password_confirmation: String,
    age: u32,
}

/// Stand-in for a lookup against existing accounts.
async fn email_is_free(email: String) -> bool {
    tokio::time::sleep(Duration::from_millis(20)).await;
    email != "taken@example.com"
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ChainError> {
    println!("=== Signup Form Validation Example ===\n");

    let mut signup = Signup {
        email: "  Taken@Example.com ".to_string(),
        password: "short".to_string(),
        password_confirmation: "short".to_string(),
        age: 21,
    };

    println!("Submitted: {:?}\n", signup);

    let mut chain = start_chain(&mut signup)
        .check("email", |s: &mut Signup| &mut s.email)
        .sanitize(|email| email.trim().to_lowercase())
        .validate(|email| email.contains('@'), "Email is malformed")
        .validate_async(email_is_free, "Email is already registered")
        .check("password", |s: &mut Signup| &mut s.password)
        .validate(|password| password.len() >= 8, "Password is too short")
        .check("password_confirmation", |s: &mut Signup| {
            &mut s.password_confirmation
        })
        .ensure_with_message("password", "Fix the password first")
        .check("age", |s: &mut Signup| &mut s.age)
        .validate(|age| *age >= 18, "Must be an adult");

    let errors = chain.pack().await?;
    drop(chain);

    println!("Found {} error(s):", errors.len());
    for error in &errors {
        println!("  - {}", error);
    }

    println!("\nAfter sanitizing: email = {:?}", signup.email);

    println!("\nKey Takeaways:");
    println!("- One error per checked field, in declaration order");
    println!("- Sanitized values are written back to the form");
    println!("- Dependent fields report the failure of the field they depend on");

    println!("\n=== Example Complete ===");
    Ok(())
}

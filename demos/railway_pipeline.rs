//! Railway Pipeline
//!
//! This example demonstrates error-as-value composition: the pipeline
//! carries a Result accumulator, and bound steps are skipped once an
//! error sentinel enters the line. The composer itself knows nothing
//! about errors.
//!
//! Key concepts:
//! - bind for fallible steps, lift for infallible ones
//! - Short-circuiting without exceptions or early returns
//! - Fail-fast: no step after the failing one runs
//!
//! Run with: cargo run --example railway_pipeline

use pipework::builder::PipeBuilder;
use pipework::core::{bind, lift};

#[derive(Clone, Debug)]
struct Signup {
    email: String,
    age: i32,
}

fn validate_email(signup: Signup) -> Result<Signup, String> {
    if signup.email.contains('@') {
        Ok(signup)
    } else {
        Err(format!("invalid email: {}", signup.email))
    }
}

fn validate_age(signup: Signup) -> Result<Signup, String> {
    if signup.age >= 18 {
        Ok(signup)
    } else {
        Err(format!("must be an adult, got age {}", signup.age))
    }
}

fn normalize_email(mut signup: Signup) -> Signup {
    signup.email = signup.email.to_lowercase();
    signup
}

fn main() {
    println!("=== Railway Pipeline Example ===\n");

    let register = PipeBuilder::new()
        .step(bind(validate_email))
        .step(bind(validate_age))
        .step(lift(normalize_email))
        .build()
        .unwrap();

    let ok = register.call(Ok(Signup {
        email: "Ada@Example.com".to_string(),
        age: 36,
    }));
    println!("Valid signup: {ok:?}");

    let underage = register.call(Ok(Signup {
        email: "kid@example.com".to_string(),
        age: 12,
    }));
    println!("Underage signup: {underage:?}");

    // An error sentinel fed in up front rides through every bound step
    let upstream = register.call(Err("upstream failure".to_string()));
    println!("Upstream error: {upstream:?}");

    println!("\n=== Example Complete ===");
}

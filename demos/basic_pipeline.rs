//! Basic Pipeline
//!
//! This example demonstrates synchronous function composition with a
//! fixed ordered list of steps.
//!
//! Key concepts:
//! - Construction-time validation (at least two steps)
//! - Strict left-to-right folding
//! - Stateless composers that can be cloned and reused
//!
//! Run with: cargo run --example basic_pipeline

use pipework::builder::PipeBuilder;
use pipework::pipe;

fn main() {
    println!("=== Basic Pipeline Example ===\n");

    // Build a pipeline with the fluent builder
    let normalize = PipeBuilder::new()
        .step(|s: String| s.trim().to_string())
        .step(|s: String| s.to_lowercase())
        .step(|s: String| s.replace(' ', "-"))
        .build()
        .unwrap();

    let slug = normalize.call("  Functional Pipelines In Rust  ".to_string());
    println!("Slug: {slug}");
    println!("Steps: {}", normalize.step_count());

    // Or with the pipe! macro
    let celsius_to_display = pipe![
        |c: f64| c * 9.0 / 5.0 + 32.0,
        |f: f64| (f * 10.0).round() / 10.0,
    ]
    .unwrap();

    println!("21.5 C = {} F", celsius_to_display.call(21.5));

    // Fewer than two steps is a configuration error, caught at build time
    let invalid = PipeBuilder::new().step(|n: i32| n + 1).build();
    println!("Single-step build: {}", invalid.unwrap_err());

    println!("\n=== Example Complete ===");
}

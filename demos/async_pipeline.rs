//! Async Pipeline
//!
//! This example demonstrates composing synchronous and asynchronous
//! steps in a single pipeline. Deferred results are resolved between
//! steps, so ordinary functions and future-returning functions mix
//! freely.
//!
//! Key concepts:
//! - Uniform sync/async step handling via StepOutcome
//! - Suspension points only at step boundaries
//! - Concurrent invocations of one composer instance
//!
//! Run with: cargo run --example async_pipeline

use pipework::builder::AsyncPipeBuilder;

#[derive(Clone, Debug)]
struct Order {
    id: u32,
    total_cents: u64,
    confirmed: bool,
}

async fn price_order(mut order: Order) -> Order {
    // Stands in for a lookup against a pricing service
    tokio::task::yield_now().await;
    order.total_cents = 1250 * u64::from(order.id);
    order
}

async fn confirm_order(mut order: Order) -> Order {
    tokio::task::yield_now().await;
    order.confirmed = true;
    order
}

fn apply_discount(mut order: Order) -> Order {
    if order.total_cents > 2000 {
        order.total_cents -= 200;
    }
    order
}

#[tokio::main]
async fn main() {
    println!("=== Async Pipeline Example ===\n");

    let checkout = AsyncPipeBuilder::new()
        .async_step(price_order)
        .step(apply_discount)
        .async_step(confirm_order)
        .build()
        .unwrap();

    let order = checkout
        .call(Order {
            id: 2,
            total_cents: 0,
            confirmed: false,
        })
        .await;
    println!("Checked out: {order:?}");

    // One composer instance, two concurrent invocations - each call owns
    // its own accumulator chain, so they never interfere.
    let (a, b) = tokio::join!(
        checkout.call(Order {
            id: 1,
            total_cents: 0,
            confirmed: false,
        }),
        checkout.call(Order {
            id: 3,
            total_cents: 0,
            confirmed: false,
        }),
    );
    println!("Concurrent results: {} cents, {} cents", a.total_cents, b.total_cents);

    println!("\n=== Example Complete ===");
}

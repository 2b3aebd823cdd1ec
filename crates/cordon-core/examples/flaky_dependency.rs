//! Isolates a flaky "inventory" dependency behind the execution gate.
//!
//! Run with: `cargo run -p cordon-core --example flaky_dependency`
use std::sync::Arc;
use std::time::Duration;

use cordon_core::prelude::*;
use cordon_model::CommandSpec;

#[tokio::main]
async fn main() {
    let registry = Arc::new(CommandRegistry::new());
    registry
        .configure("inventory", CommandSpec::new(2, 100))
        .expect("valid spec");
    let gate = ExecutionGate::new(registry);

    // fast call: completes well inside the 100ms budget
    let ok = gate
        .execute_wait(
            "inventory",
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(())
            },
            None,
        )
        .await;
    println!("fast call: {ok:?}");

    // slow call: times out, the fallback serves a cached answer
    let fallback: FallbackFn = Box::new(|err| {
        println!("falling back after: {err}");
        Ok(())
    });
    let recovered = gate
        .execute_wait(
            "inventory",
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            },
            Some(fallback),
        )
        .await;
    println!("slow call with fallback: {recovered:?}");
}

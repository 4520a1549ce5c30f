//! Collecting violations instead of panicking, with tracing enabled
//!
//! Run with: cargo run --example checked_outcomes --features tracing

use affirm::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let readings: [Option<f64>; 4] = [Some(21.5), None, Some(-4.0), Some(99.9)];

    let violations: Vec<AssertionViolation> = readings
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(index, reading)| {
            reading
                .should()
                .named(format!("reading[{index}]"))
                .because("sensors report between -10 and 50 degrees")
                .checked()
                .be_between(-10.0, 50.0)
                .err()
        })
        .collect();

    println!("{} of {} readings failed", violations.len(), readings.len());
    for violation in &violations {
        println!("{violation}");
    }

    let _comma = Culture::with_decimal_separator(',').scope();
    if let Err(violation) = 21.5_f64.should().checked().be_negative() {
        println!("\nwith a decimal comma:{violation}");
    }
}

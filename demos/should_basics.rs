//! Should-style assertions across value types
//!
//! Run with: cargo run --example should_basics

use affirm::prelude::*;
use rust_decimal::Decimal;

fn main() {
    println!("=== Numbers ===");
    let answer: i32 = 42;
    answer.should().be(42);
    answer.should().be_between(1, 100);
    answer.should_not().be_negative();
    println!("{answer} passed every numeric assertion");

    println!("\n=== Nullable values ===");
    let missing: Option<u16> = None;
    missing.should().be_null();
    missing.should_not().be_greater_than(0);
    println!("None is never greater than anything, so the inverse passes");

    println!("\n=== Decimals ===");
    let price = Decimal::new(1999, 2);
    price
        .should()
        .be_approximately(Decimal::from(20), Decimal::new(1, 2));
    println!("{price} is within a cent of 20");

    println!("\n=== Strings ===");
    let greeting = "hello, world";
    greeting.should().start_with("hello");
    greeting.should().match_pattern("hello*world");
    greeting.should_not().contain_ignoring_case("GOODBYE");
    println!("{greeting:?} passed every string assertion");

    println!("\n=== A failure, caught ===");
    let outcome = answer
        .should()
        .because("that's the bottom line")
        .checked()
        .be(13);
    if let Err(violation) = outcome {
        println!("message:{violation}");
    }
}

//! Test helpers for checked assertions
//!
//! These macros make the outcome of a [`Check`](crate::Check) validator easy to
//! assert on, which is mostly useful when testing custom predicates.
//!
//! ```rust
//! use affirm::{assert_passes, assert_violates, Validator};
//!
//! assert_passes!(Validator::new(1_u8).checked().be(1));
//! assert_violates!(
//!     Validator::new(1_u8).checked().be(2),
//!     "\nvalidator\nis \"1\"\nbut was expected to be \"2\""
//! );
//! ```

/// Assert that a checked outcome passed.
///
/// Panics with the violation message if it did not.
#[macro_export]
macro_rules! assert_passes {
    ($outcome:expr) => {
        match $outcome {
            ::core::result::Result::Ok(()) => {}
            ::core::result::Result::Err(violation) => {
                panic!("Expected the assertion to pass, got violation:{}", violation);
            }
        }
    };
}

/// Assert that a checked outcome failed, optionally with an exact message.
///
/// Evaluates to the [`AssertionViolation`](crate::AssertionViolation).
#[macro_export]
macro_rules! assert_violates {
    ($outcome:expr) => {
        match $outcome {
            ::core::result::Result::Err(violation) => violation,
            ::core::result::Result::Ok(()) => {
                panic!("Expected an assertion violation, but the assertion passed");
            }
        }
    };
    ($outcome:expr, $message:expr) => {{
        let violation = $crate::assert_violates!($outcome);
        assert_eq!(violation.message(), $message);
        violation
    }};
}

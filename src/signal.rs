//! How assertion outcomes are reported
//!
//! A validator does not decide by itself what happens when a predicate fails.
//! Its [`Signal`] does:
//!
//! - [`Panic`] (the default) panics with the failure message, which is how
//!   the Rust test harness learns that a test failed;
//! - [`Check`] hands the [`AssertionViolation`] back as an `Err`.
//!
//! # Example
//!
//! ```rust
//! use affirm::Validator;
//!
//! let outcome = Validator::new(42).checked().be(13);
//! assert!(outcome.is_err());
//! ```

use crate::violation::AssertionViolation;

/// Reporting strategy for assertion outcomes.
pub trait Signal {
    /// What a predicate method returns.
    type Outcome;

    /// Outcome of a predicate that passed.
    fn pass() -> Self::Outcome;

    /// Outcome of a predicate that failed.
    fn fail(violation: AssertionViolation) -> Self::Outcome;
}

/// Panic with the failure message. The default signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panic;

impl Signal for Panic {
    type Outcome = ();

    #[inline]
    fn pass() {}

    #[track_caller]
    fn fail(violation: AssertionViolation) {
        panic!("{violation}")
    }
}

/// Return the violation as `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Check;

impl Signal for Check {
    type Outcome = Result<(), AssertionViolation>;

    #[inline]
    fn pass() -> Self::Outcome {
        Ok(())
    }

    fn fail(violation: AssertionViolation) -> Self::Outcome {
        Err(violation)
    }
}

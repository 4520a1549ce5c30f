//! Predicates evaluated by validators
//!
//! A predicate knows two things: whether it holds for an actual value, and how
//! to describe what it expected. It knows nothing about polarity beyond the
//! wording; the validator decides whether a raw outcome passes.
//!
//! Every comparison predicate treats a null actual as not holding, so a null
//! never lies "between" or "greater than" anything, while the inverse form
//! ("not greater than") passes.
//!
//! # Custom predicates
//!
//! ```rust
//! use affirm::predicate::Predicate;
//! use affirm::{Culture, Polarity, Validator};
//!
//! struct Even;
//!
//! impl Predicate<i32> for Even {
//!     fn check(&self, actual: &i32) -> bool {
//!         actual % 2 == 0
//!     }
//!
//!     fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
//!         format!("{} even", polarity.to_be())
//!     }
//! }
//!
//! Validator::new(4).satisfy(Even);
//! let violation = Validator::new(3).checked().satisfy(Even).unwrap_err();
//! assert_eq!(violation.expectation(), "to be even");
//! ```

mod equality;
mod number;
mod string;

use crate::culture::Culture;
use crate::polarity::Polarity;

pub use equality::{Equal, Null, OneOf, Truth};
pub use number::{
    Approximately, Between, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, Negative,
    Positive,
};
pub use string::{
    Contains, Empty, EndsWith, EqualIgnoringCase, MatchesPattern, MatchesRegex, NullOrEmpty,
    StartsWith,
};

/// A condition on values of type `T`.
pub trait Predicate<T: ?Sized> {
    /// Whether the condition holds for `actual`, regardless of polarity.
    fn check(&self, actual: &T) -> bool;

    /// The message text after `but was expected `.
    fn expectation(&self, polarity: Polarity, culture: &Culture) -> String;
}

//! # Affirm
//!
//! Fluent, should-style assertions for primitive values.
//!
//! Every supported value (integers of every width, `f32`, `f64`,
//! [`Decimal`](rust_decimal::Decimal), `bool`, strings and the `Option` form of
//! each) gets the same validator. A predicate either passes silently or
//! reports an [`AssertionViolation`] with a uniform message:
//!
//! ```text
//!
//! validator
//! is "42"
//! but was expected to be "13"
//! because that's the bottom line
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use affirm::prelude::*;
//!
//! let answer: i32 = 42;
//! answer.should().be(42);
//! answer.should().be_between(1, 100);
//! answer.should_not().be_one_of([7, 13]);
//!
//! "string".should().start_with("str");
//! "string".should().match_pattern("st*ng");
//!
//! let missing: Option<u32> = None;
//! missing.should().be_null();
//! missing.should_not().be_greater_than(10);
//!
//! // Checked validators return the violation instead of panicking.
//! let violation = answer
//!     .should()
//!     .because("that's the bottom line")
//!     .checked()
//!     .be(13)
//!     .unwrap_err();
//! assert_eq!(
//!     violation.message(),
//!     "\nvalidator\nis \"42\"\nbut was expected to be \"13\"\nbecause that's the bottom line"
//! );
//! ```
//!
//! ## Nulls
//!
//! A null actual value (`None`, or [`Text::null`]) never satisfies a
//! comparison: it is not between, greater than, or less than anything. The
//! inverse validator therefore passes for it. `be`, `be_one_of` and `be_null`
//! treat null as an ordinary value that equals only itself.
//!
//! ## Numbers in messages
//!
//! Fractional numbers are rendered with the decimal separator of the current
//! [`Culture`], taken from the locale environment unless overridden.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod culture;
pub mod operand;
pub mod polarity;
pub mod predicate;
pub mod render;
pub mod should;
pub mod signal;
pub mod testing;
pub mod validator;
pub mod violation;
pub mod wildcard;

// Re-exports
pub use culture::{Culture, CultureScope};
pub use operand::{Approximate, Nullable, Number, Operand, Text};
pub use polarity::Polarity;
pub use render::Render;
pub use should::Should;
pub use signal::{Check, Panic, Signal};
pub use validator::Validator;
pub use violation::AssertionViolation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::culture::Culture;
    pub use crate::operand::Text;
    pub use crate::polarity::Polarity;
    pub use crate::should::Should;
    pub use crate::signal::{Check, Panic};
    pub use crate::validator::Validator;
    pub use crate::violation::AssertionViolation;
}

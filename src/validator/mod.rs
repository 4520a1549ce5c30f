//! The fluent validator
//!
//! A [`Validator`] wraps one actual value and a [`Polarity`]. Each predicate
//! method evaluates a [`Predicate`] against the value, reads the outcome
//! through the polarity and reports it through the [`Signal`].
//!
//! Which methods exist depends on the wrapped type:
//!
//! | Wrapped type | Methods |
//! |---|---|
//! | any [`Operand`] | `be`, `be_one_of` |
//! | numbers, `Option<number>` | comparisons, `be_negative`, `be_positive` |
//! | `f32`, `f64`, `Decimal` (+ `Option`) | `be_approximately` |
//! | `bool`, `Option<bool>` | `be_true`, `be_false` |
//! | `Option<_>`, [`Text`] | `be_null` |
//! | [`Text`] | string predicates |
//!
//! # Example
//!
//! ```rust
//! use affirm::Validator;
//!
//! Validator::new(42).be(42);
//! Validator::inverse(42_i32).be_between(1, 10);
//!
//! let violation = Validator::new(42)
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
//! [`Text`]: crate::Text

mod number;
mod string;

use crate::culture::Culture;
use crate::operand::{Nullable, Operand};
use crate::polarity::Polarity;
use crate::predicate::{Equal, Null, OneOf, Predicate, Truth};
use crate::render::Render;
use crate::signal::{Check, Panic, Signal};
use crate::violation::AssertionViolation;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Name used on the second line of a failure message.
pub const DEFAULT_SUBJECT: &str = "validator";

/// Assertions about one captured value.
#[derive(Debug, Clone)]
pub struct Validator<T, S = Panic> {
    actual: T,
    polarity: Polarity,
    subject: Cow<'static, str>,
    reason: Option<String>,
    culture: Option<Culture>,
    signal: PhantomData<fn() -> S>,
}

impl<T> Validator<T, Panic> {
    /// A validator whose predicates must hold.
    pub fn new(actual: T) -> Self {
        Self::with_polarity(actual, Polarity::Positive)
    }

    /// A validator whose predicates must not hold.
    pub fn inverse(actual: T) -> Self {
        Self::with_polarity(actual, Polarity::Inverse)
    }

    /// A validator with an explicit polarity.
    pub fn with_polarity(actual: T, polarity: Polarity) -> Self {
        Validator {
            actual,
            polarity,
            subject: Cow::Borrowed(DEFAULT_SUBJECT),
            reason: None,
            culture: None,
            signal: PhantomData,
        }
    }
}

impl<T, S: Signal> Validator<T, S> {
    /// Name the value in failure messages instead of `validator`.
    pub fn named(mut self, subject: impl Into<Cow<'static, str>>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Explain why the assertion should hold; shown as `because <reason>`.
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Render numbers with this culture instead of [`Culture::current`].
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }

    /// Return violations as `Err` instead of panicking.
    pub fn checked(self) -> Validator<T, Check> {
        self.signal()
    }

    /// Switch to another reporting strategy.
    pub fn signal<R: Signal>(self) -> Validator<T, R> {
        Validator {
            actual: self.actual,
            polarity: self.polarity,
            subject: self.subject,
            reason: self.reason,
            culture: self.culture,
            signal: PhantomData,
        }
    }

    /// The wrapped value.
    pub fn actual(&self) -> &T {
        &self.actual
    }

    /// Whether predicates must hold or must not hold.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The name shown in failure messages.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The reason shown in failure messages, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The culture used to render numbers.
    pub fn culture(&self) -> Culture {
        self.culture.unwrap_or_else(Culture::current)
    }
}

impl<T: Render, S: Signal> Validator<T, S> {
    /// Evaluate any predicate under this validator's polarity.
    #[track_caller]
    pub fn satisfy<P: Predicate<T>>(&self, predicate: P) -> S::Outcome {
        let holds = predicate.check(&self.actual);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            subject = %self.subject,
            polarity = ?self.polarity,
            holds,
            "evaluated predicate"
        );

        if self.polarity.accepts(holds) {
            return S::pass();
        }

        S::fail(self.violation(&predicate))
    }

    fn violation<P: Predicate<T>>(&self, predicate: &P) -> AssertionViolation {
        let culture = self.culture();
        let violation = AssertionViolation::new(
            self.subject.clone().into_owned(),
            self.actual.render(&culture),
            predicate.expectation(self.polarity, &culture),
            self.reason.clone(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            subject = violation.subject(),
            actual = violation.actual(),
            expectation = violation.expectation(),
            "assertion violated"
        );

        violation
    }
}

impl<T: Operand, S: Signal> Validator<T, S> {
    /// Actual equals `expected`. Null equals null.
    #[track_caller]
    pub fn be(&self, expected: T) -> S::Outcome {
        self.satisfy(Equal(expected))
    }

    /// Actual equals one of `candidates`, in any order.
    #[track_caller]
    pub fn be_one_of(&self, candidates: impl IntoIterator<Item = T>) -> S::Outcome {
        self.satisfy(OneOf(candidates.into_iter().collect()))
    }
}

impl<T: Operand<Value = bool>, S: Signal> Validator<T, S> {
    /// Actual is `true`. Null is neither true nor false.
    #[track_caller]
    pub fn be_true(&self) -> S::Outcome {
        self.satisfy(Truth(true))
    }

    /// Actual is `false`. Null is neither true nor false.
    #[track_caller]
    pub fn be_false(&self) -> S::Outcome {
        self.satisfy(Truth(false))
    }
}

impl<T: Nullable, S: Signal> Validator<T, S> {
    /// Actual is null.
    #[track_caller]
    pub fn be_null(&self) -> S::Outcome {
        self.satisfy(Null)
    }
}

//! Numeric assertions, for plain and nullable numbers alike

use super::Validator;
use crate::operand::{Approximate, Number, Operand};
use crate::predicate::{
    Approximately, Between, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, Negative,
    Positive,
};
use crate::signal::Signal;

impl<T, S> Validator<T, S>
where
    T: Operand,
    T::Value: Number,
    S: Signal,
{
    /// Actual lies in `[minimum, maximum]`.
    ///
    /// The bounds are not reordered: when `minimum > maximum` the range is
    /// empty and no actual value lies in it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Validator;
    ///
    /// Validator::new(5_i32).be_between(1, 10);
    /// assert!(Validator::new(5_i32).checked().be_between(10, 1).is_err());
    /// ```
    #[track_caller]
    pub fn be_between(&self, minimum: T::Value, maximum: T::Value) -> S::Outcome {
        self.satisfy(Between {
            min: minimum,
            max: maximum,
        })
    }

    /// Actual is strictly greater than `minimum`.
    #[track_caller]
    pub fn be_greater_than(&self, minimum: T::Value) -> S::Outcome {
        self.satisfy(GreaterThan(minimum))
    }

    /// Actual is greater than or equal to `minimum`.
    #[track_caller]
    pub fn be_greater_than_or_equal_to(&self, minimum: T::Value) -> S::Outcome {
        self.satisfy(GreaterThanOrEqual(minimum))
    }

    /// Actual is strictly less than `maximum`.
    #[track_caller]
    pub fn be_less_than(&self, maximum: T::Value) -> S::Outcome {
        self.satisfy(LessThan(maximum))
    }

    /// Actual is less than or equal to `maximum`.
    #[track_caller]
    pub fn be_less_than_or_equal_to(&self, maximum: T::Value) -> S::Outcome {
        self.satisfy(LessThanOrEqual(maximum))
    }

    /// Actual is below zero.
    #[track_caller]
    pub fn be_negative(&self) -> S::Outcome {
        self.satisfy(Negative)
    }

    /// Actual is zero or above.
    ///
    /// Zero passes here but fails [`be_negative`](Self::be_negative).
    #[track_caller]
    pub fn be_positive(&self) -> S::Outcome {
        self.satisfy(Positive)
    }
}

impl<T, S> Validator<T, S>
where
    T: Operand,
    T::Value: Approximate,
    S: Signal,
{
    /// `|actual - expected| <= tolerance`. A null actual is never close.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Validator;
    ///
    /// Validator::new(0.1_f64 + 0.2).be_approximately(0.3, 1e-9);
    /// Validator::inverse(None::<f64>).be_approximately(0.3, 1.0);
    /// ```
    #[track_caller]
    pub fn be_approximately(&self, expected: T::Value, tolerance: T::Value) -> S::Outcome {
        self.satisfy(Approximately {
            expected,
            tolerance,
        })
    }
}

//! Numeric predicates
//!
//! Comparisons hold only for non-null operands. Bounds are used exactly as
//! given: `Between { min: 130, max: 13 }` is an empty range.

use super::Predicate;
use crate::culture::Culture;
use crate::operand::{Approximate, Number, Operand};
use crate::polarity::Polarity;
use crate::render::Render;

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $op:tt, $wording:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<V>(pub V);

        impl<T> Predicate<T> for $name<T::Value>
        where
            T: Operand,
            T::Value: Number,
        {
            #[inline]
            fn check(&self, actual: &T) -> bool {
                actual.value().is_some_and(|value| *value $op self.0)
            }

            fn expectation(&self, polarity: Polarity, culture: &Culture) -> String {
                format!(
                    concat!("{} ", $wording, " \"{}\""),
                    polarity.to_be(),
                    self.0.render(culture)
                )
            }
        }
    };
}

comparison!(
    /// Actual is strictly greater than the bound.
    GreaterThan, >, "greater than"
);
comparison!(
    /// Actual is greater than or equal to the bound.
    GreaterThanOrEqual, >=, "greater than or equal to"
);
comparison!(
    /// Actual is strictly less than the bound.
    LessThan, <, "less than"
);
comparison!(
    /// Actual is less than or equal to the bound.
    LessThanOrEqual, <=, "less than or equal to"
);

/// Actual lies in the inclusive range `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct Between<V> {
    /// Lower bound, inclusive.
    pub min: V,
    /// Upper bound, inclusive.
    pub max: V,
}

impl<T> Predicate<T> for Between<T::Value>
where
    T: Operand,
    T::Value: Number,
{
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual
            .value()
            .is_some_and(|value| self.min <= *value && *value <= self.max)
    }

    fn expectation(&self, polarity: Polarity, culture: &Culture) -> String {
        format!(
            "{} between \"{}\" and \"{}\"",
            polarity.to_be(),
            self.min.render(culture),
            self.max.render(culture)
        )
    }
}

/// Actual is below zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negative;

impl<T> Predicate<T> for Negative
where
    T: Operand,
    T::Value: Number,
{
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual
            .value()
            .is_some_and(|value| *value < <T::Value as Number>::ZERO)
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} a negative value", polarity.to_have())
    }
}

/// Actual is zero or above.
///
/// Zero counts as positive, so `Positive` and [`Negative`] are not
/// complements at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Positive;

impl<T> Predicate<T> for Positive
where
    T: Operand,
    T::Value: Number,
{
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual
            .value()
            .is_some_and(|value| *value >= <T::Value as Number>::ZERO)
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} a positive value", polarity.to_have())
    }
}

/// Actual is within `tolerance` of `expected`.
#[derive(Clone, Copy, Debug)]
pub struct Approximately<V> {
    /// The value compared against.
    pub expected: V,
    /// Largest accepted absolute difference.
    pub tolerance: V,
}

impl<T> Predicate<T> for Approximately<T::Value>
where
    T: Operand,
    T::Value: Approximate,
{
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual
            .value()
            .is_some_and(|value| value.within(self.expected, self.tolerance))
    }

    fn expectation(&self, polarity: Polarity, culture: &Culture) -> String {
        format!(
            "{} approximately \"{}\" with a tolerance of \"{}\"",
            polarity.to_be(),
            self.expected.render(culture),
            self.tolerance.render(culture)
        )
    }
}

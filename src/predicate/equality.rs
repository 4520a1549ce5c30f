//! Equality, membership and null predicates

use super::Predicate;
use crate::culture::Culture;
use crate::operand::{Nullable, Operand};
use crate::polarity::Polarity;
use crate::render::{quoted_list, Render};

/// Actual equals the expected value. Null equals null.
#[derive(Clone, Copy, Debug)]
pub struct Equal<T>(pub T);

impl<T: PartialEq + Render> Predicate<T> for Equal<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual == self.0
    }

    fn expectation(&self, polarity: Polarity, culture: &Culture) -> String {
        format!("{} \"{}\"", polarity.to_be(), self.0.render(culture))
    }
}

/// Actual equals at least one candidate.
#[derive(Clone, Debug)]
pub struct OneOf<T>(pub Vec<T>);

impl<T: PartialEq + Render> Predicate<T> for OneOf<T> {
    fn check(&self, actual: &T) -> bool {
        self.0.iter().any(|candidate| candidate == actual)
    }

    fn expectation(&self, polarity: Polarity, culture: &Culture) -> String {
        format!(
            "{} one of the following values: {}",
            polarity.to_be(),
            quoted_list(&self.0, culture)
        )
    }
}

/// A boolean operand has the given truth value. Null has neither.
#[derive(Clone, Copy, Debug)]
pub struct Truth(pub bool);

impl<T: Operand<Value = bool>> Predicate<T> for Truth {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual.value() == Some(&self.0)
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} \"{}\"", polarity.to_be(), self.0)
    }
}

/// Actual is null.
#[derive(Clone, Copy, Debug, Default)]
pub struct Null;

impl<T: Nullable> Predicate<T> for Null {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        actual.is_null()
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} null", polarity.to_be())
    }
}

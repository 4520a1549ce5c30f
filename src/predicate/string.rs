//! String predicates
//!
//! All of them operate on [`Text`]. A null string contains nothing, starts
//! and ends with nothing and matches no pattern.

use super::Predicate;
use crate::culture::Culture;
use crate::operand::Text;
use crate::polarity::Polarity;
use crate::wildcard::Wildcard;
use regex::Regex;

const IGNORING_CASE: &str = " (ignoring case)";

fn case_suffix(ignore_case: bool) -> &'static str {
    if ignore_case {
        IGNORING_CASE
    } else {
        ""
    }
}

/// Case-insensitive equality. Null equals nothing.
#[derive(Clone, Debug)]
pub struct EqualIgnoringCase(pub String);

impl Predicate<Text<'_>> for EqualIgnoringCase {
    fn check(&self, actual: &Text<'_>) -> bool {
        actual
            .as_str()
            .is_some_and(|text| text.to_lowercase() == self.0.to_lowercase())
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} \"{}\"{IGNORING_CASE}", polarity.to_be(), self.0)
    }
}

/// The empty, non-null string.
#[derive(Clone, Copy, Debug, Default)]
pub struct Empty;

impl Predicate<Text<'_>> for Empty {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual.as_str().is_some_and(str::is_empty)
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} empty", polarity.to_be())
    }
}

/// The null string or the empty string.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOrEmpty;

impl Predicate<Text<'_>> for NullOrEmpty {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual.as_str().is_none_or(str::is_empty)
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} null or empty", polarity.to_be())
    }
}

/// Actual contains a substring.
#[derive(Clone, Debug)]
pub struct Contains {
    /// The substring searched for.
    pub needle: String,
    /// Compare lowercased forms.
    pub ignore_case: bool,
}

impl Predicate<Text<'_>> for Contains {
    fn check(&self, actual: &Text<'_>) -> bool {
        actual.as_str().is_some_and(|text| {
            if self.ignore_case {
                text.to_lowercase().contains(&self.needle.to_lowercase())
            } else {
                text.contains(self.needle.as_str())
            }
        })
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!(
            "{} contain \"{}\"{}",
            polarity.to(),
            self.needle,
            case_suffix(self.ignore_case)
        )
    }
}

/// Actual starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith(pub String);

impl Predicate<Text<'_>> for StartsWith {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual
            .as_str()
            .is_some_and(|text| text.starts_with(self.0.as_str()))
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} start with \"{}\"", polarity.to(), self.0)
    }
}

/// Actual ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith(pub String);

impl Predicate<Text<'_>> for EndsWith {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual
            .as_str()
            .is_some_and(|text| text.ends_with(self.0.as_str()))
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!("{} end with \"{}\"", polarity.to(), self.0)
    }
}

/// The whole of actual matches a wildcard pattern.
#[derive(Clone, Debug)]
pub struct MatchesPattern(pub Wildcard);

impl Predicate<Text<'_>> for MatchesPattern {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual.as_str().is_some_and(|text| self.0.is_match(text))
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!(
            "{} match pattern \"{}\"{}",
            polarity.to(),
            self.0.pattern(),
            case_suffix(self.0.is_case_insensitive())
        )
    }
}

/// Actual contains a match of a regular expression.
///
/// The expression is not anchored; use `^` and `$` to match the whole string.
#[derive(Clone, Debug)]
pub struct MatchesRegex(pub Regex);

impl Predicate<Text<'_>> for MatchesRegex {
    #[inline]
    fn check(&self, actual: &Text<'_>) -> bool {
        actual.as_str().is_some_and(|text| self.0.is_match(text))
    }

    fn expectation(&self, polarity: Polarity, _culture: &Culture) -> String {
        format!(
            "{} match regular expression \"{}\"",
            polarity.to(),
            self.0.as_str()
        )
    }
}

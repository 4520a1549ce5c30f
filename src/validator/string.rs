//! String assertions

use super::Validator;
use crate::operand::Text;
use crate::predicate::{
    Contains, Empty, EndsWith, Equal, EqualIgnoringCase, MatchesPattern, MatchesRegex, NullOrEmpty,
    OneOf, StartsWith,
};
use crate::signal::Signal;
use crate::wildcard::Wildcard;
use regex::Regex;

impl<'a, S: Signal> Validator<Text<'a>, S> {
    /// Actual equals `expected`. The null string equals only itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::{Text, Validator};
    ///
    /// Validator::new(Text::from("abc")).be("abc");
    /// Validator::new(Text::null()).be(None::<&str>);
    /// Validator::inverse(Text::null()).be("");
    /// ```
    #[track_caller]
    pub fn be(&self, expected: impl Into<Text<'a>>) -> S::Outcome {
        self.satisfy(Equal(expected.into()))
    }

    /// Actual equals `expected` when both are lowercased.
    #[track_caller]
    pub fn be_ignoring_case(&self, expected: &str) -> S::Outcome {
        self.satisfy(EqualIgnoringCase(expected.to_owned()))
    }

    /// Actual equals one of `candidates`, in any order.
    #[track_caller]
    pub fn be_one_of<I>(&self, candidates: I) -> S::Outcome
    where
        I: IntoIterator,
        I::Item: Into<Text<'a>>,
    {
        self.satisfy(OneOf(candidates.into_iter().map(Into::into).collect()))
    }

    /// Actual is the empty string. The null string is not empty.
    #[track_caller]
    pub fn be_empty(&self) -> S::Outcome {
        self.satisfy(Empty)
    }

    /// Actual is null or the empty string.
    #[track_caller]
    pub fn be_null_or_empty(&self) -> S::Outcome {
        self.satisfy(NullOrEmpty)
    }

    /// Actual contains `substring`.
    #[track_caller]
    pub fn contain(&self, substring: &str) -> S::Outcome {
        self.satisfy(Contains {
            needle: substring.to_owned(),
            ignore_case: false,
        })
    }

    /// Actual contains `substring`, ignoring case.
    #[track_caller]
    pub fn contain_ignoring_case(&self, substring: &str) -> S::Outcome {
        self.satisfy(Contains {
            needle: substring.to_owned(),
            ignore_case: true,
        })
    }

    /// Actual starts with `prefix`.
    #[track_caller]
    pub fn start_with(&self, prefix: &str) -> S::Outcome {
        self.satisfy(StartsWith(prefix.to_owned()))
    }

    /// Actual ends with `suffix`.
    #[track_caller]
    pub fn end_with(&self, suffix: &str) -> S::Outcome {
        self.satisfy(EndsWith(suffix.to_owned()))
    }

    /// The whole of actual matches a wildcard pattern, `*` matching any run
    /// of characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::{Text, Validator};
    ///
    /// Validator::new(Text::from("string")).match_pattern("st*ng");
    /// Validator::inverse(Text::from("string")).match_pattern("ST*NG");
    /// ```
    #[track_caller]
    pub fn match_pattern(&self, pattern: &str) -> S::Outcome {
        self.satisfy(MatchesPattern(compile(Wildcard::new(pattern), pattern)))
    }

    /// Like [`match_pattern`](Self::match_pattern), ignoring case.
    #[track_caller]
    pub fn match_pattern_ignoring_case(&self, pattern: &str) -> S::Outcome {
        self.satisfy(MatchesPattern(compile(
            Wildcard::ignoring_case(pattern),
            pattern,
        )))
    }

    /// Actual contains a match of the regular expression `pattern`.
    ///
    /// # Panics
    ///
    /// Panics when `pattern` is not a valid regular expression, whatever the
    /// signal. An invalid pattern is a mistake in the test, not a failed
    /// assertion.
    #[track_caller]
    pub fn match_regex(&self, pattern: &str) -> S::Outcome {
        self.satisfy(MatchesRegex(compile(Regex::new(pattern), pattern)))
    }
}

#[track_caller]
fn compile<P>(compiled: Result<P, regex::Error>, pattern: &str) -> P {
    match compiled {
        Ok(compiled) => compiled,
        Err(err) => panic!("invalid pattern {pattern:?}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Text, Validator};

    fn text(value: &str) -> Validator<Text<'_>, crate::Check> {
        Validator::new(Text::from(value)).checked()
    }

    fn null() -> Validator<Text<'static>, crate::Check> {
        Validator::new(Text::null()).checked()
    }

    #[test]
    fn equality() {
        assert!(text("abc").be("abc").is_ok());
        assert!(text("abc").be(String::from("abc")).is_ok());
        assert!(text("abc").be("ABC").is_err());
        assert!(text("abc").be_ignoring_case("ABC").is_ok());
        assert!(null().be(None::<&str>).is_ok());
        assert!(null().be("").is_err());
    }

    #[test]
    fn inverse_null_equals_null() {
        let violation = Validator::inverse(Text::null())
            .checked()
            .be(None::<&str>)
            .unwrap_err();
        assert_eq!(
            violation.message(),
            "\nvalidator\nis \"\"\nbut was expected not to be \"\""
        );
    }

    #[test]
    fn one_of() {
        assert!(text("b").be_one_of(["a", "b"]).is_ok());
        assert!(null().be_one_of([Some("a"), None]).is_ok());
        let violation = text("c").be_one_of(["a", "b"]).unwrap_err();
        assert_eq!(
            violation.expectation(),
            "to be one of the following values: \"a\", \"b\""
        );
    }

    #[test]
    fn emptiness() {
        assert!(text("").be_empty().is_ok());
        assert!(null().be_empty().is_err());
        assert!(null().be_null_or_empty().is_ok());
        assert!(text("").be_null_or_empty().is_ok());
        assert!(text(" ").be_null_or_empty().is_err());
        assert!(null().be_null().is_ok());
        assert!(text("").be_null().is_err());
    }

    #[test]
    fn substrings() {
        assert!(text("string").contain("rin").is_ok());
        assert!(text("string").contain("RIN").is_err());
        assert!(text("string").contain_ignoring_case("RIN").is_ok());
        assert!(text("string").start_with("str").is_ok());
        assert!(text("string").end_with("ing").is_ok());
        assert!(null().contain("").is_err());
        assert!(null().start_with("").is_err());
        assert!(null().end_with("").is_err());
    }

    #[test]
    fn inverse_contain_wording() {
        let violation = Validator::inverse(Text::from("string"))
            .because("no rings allowed")
            .checked()
            .contain("rin")
            .unwrap_err();
        assert_eq!(
            violation.message(),
            "\nvalidator\nis \"string\"\nbut was expected to not contain \"rin\"\nbecause no rings allowed"
        );
    }

    #[test]
    fn patterns() {
        assert!(text("string").match_pattern("st*ng").is_ok());
        assert!(text("string").match_pattern("ST*NG").is_err());
        assert!(text("string").match_pattern_ignoring_case("ST*NG").is_ok());
        assert!(null().match_pattern("*").is_err());
        assert!(text("abc123").match_regex(r"^[a-z]+\d+$").is_ok());
        assert!(text("abc").match_regex(r"\d").is_err());
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn invalid_regex_panics_even_when_checked() {
        let _ = text("abc").match_regex("(");
    }
}

//! Wildcard patterns
//!
//! A wildcard pattern matches a whole string. `*` matches zero or more
//! characters (newlines included); every other character matches itself.
//!
//! # Example
//!
//! ```rust
//! use affirm::wildcard::Wildcard;
//!
//! let pattern = Wildcard::new("st*ng").unwrap();
//! assert!(pattern.is_match("string"));
//! assert!(pattern.is_match("sting"));
//! assert!(!pattern.is_match("strings"));
//! ```

use regex::{Regex, RegexBuilder};

/// A compiled wildcard pattern.
#[derive(Clone, Debug)]
pub struct Wildcard {
    pattern: String,
    ignore_case: bool,
    regex: Regex,
}

impl Wildcard {
    /// Compile a case-sensitive pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::build(pattern, false)
    }

    /// Compile a pattern that ignores case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::wildcard::Wildcard;
    ///
    /// assert!(Wildcard::ignoring_case("ST*NG").unwrap().is_match("String"));
    /// ```
    pub fn ignoring_case(pattern: &str) -> Result<Self, regex::Error> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, ignore_case: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex_source(pattern))
            .case_insensitive(ignore_case)
            .dot_matches_new_line(true)
            .build()?;

        Ok(Wildcard {
            pattern: pattern.to_owned(),
            ignore_case,
            regex,
        })
    }

    /// Whether the whole of `text` matches.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern ignores case.
    pub fn is_case_insensitive(&self) -> bool {
        self.ignore_case
    }
}

/// Translate a wildcard pattern into an anchored regular expression.
fn regex_source(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!(r"\A(?:{body})\z")
}

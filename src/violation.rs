//! The failure raised when an assertion does not hold
//!
//! Every failed predicate produces an [`AssertionViolation`]. Its `Display`
//! output is the failure message:
//!
//! ```text
//!
//! validator
//! is "42"
//! but was expected to be "13"
//! because that's the bottom line
//! ```
//!
//! The message starts with a newline, and the `because` line is omitted when
//! no reason was given.
//!
//! # Example
//!
//! ```rust
//! use affirm::AssertionViolation;
//!
//! let violation = AssertionViolation::new("validator", "42", "to be \"13\"", None);
//! assert_eq!(
//!     violation.message(),
//!     "\nvalidator\nis \"42\"\nbut was expected to be \"13\""
//! );
//! ```

/// A predicate that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("\n{subject}\nis \"{actual}\"\nbut was expected {expectation}{}", because_line(.reason))]
pub struct AssertionViolation {
    subject: String,
    actual: String,
    expectation: String,
    reason: Option<String>,
}

fn because_line(reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!("\nbecause {reason}"),
        _ => String::new(),
    }
}

impl AssertionViolation {
    /// Create a violation from already rendered parts.
    ///
    /// `expectation` is the text following `but was expected `, for example
    /// `to be "13"` or `not to be between "1" and "5"`.
    pub fn new(
        subject: impl Into<String>,
        actual: impl Into<String>,
        expectation: impl Into<String>,
        reason: Option<String>,
    ) -> Self {
        AssertionViolation {
            subject: subject.into(),
            actual: actual.into(),
            expectation: expectation.into(),
            reason,
        }
    }

    /// Name of the asserted value, `validator` unless renamed.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The actual value as it appears in the message.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// What the predicate expected, including the polarity wording.
    pub fn expectation(&self) -> &str {
        &self.expectation
    }

    /// The caller-supplied reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The formatted failure message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

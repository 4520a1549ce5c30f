//! Positive and inverse assertions
//!
//! A validator created with `should()` requires its predicates to hold, one
//! created with `should_not()` requires them not to hold. Both evaluate the
//! same raw condition; [`Polarity`] decides how the outcome is read and which
//! wording the failure message uses.

/// Whether a predicate must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// The predicate must hold.
    #[default]
    Positive,
    /// The predicate must not hold.
    Inverse,
}

impl Polarity {
    /// Returns true for [`Polarity::Inverse`].
    pub const fn is_inverse(self) -> bool {
        matches!(self, Polarity::Inverse)
    }

    /// The opposite polarity.
    pub const fn flip(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Inverse,
            Polarity::Inverse => Polarity::Positive,
        }
    }

    /// Decide whether a raw predicate outcome passes under this polarity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affirm::Polarity;
    ///
    /// assert!(Polarity::Positive.accepts(true));
    /// assert!(Polarity::Inverse.accepts(false));
    /// assert!(!Polarity::Inverse.accepts(true));
    /// ```
    #[inline]
    pub const fn accepts(self, holds: bool) -> bool {
        match self {
            Polarity::Positive => holds,
            Polarity::Inverse => !holds,
        }
    }

    /// `"to be"` or `"not to be"`.
    pub const fn to_be(self) -> &'static str {
        match self {
            Polarity::Positive => "to be",
            Polarity::Inverse => "not to be",
        }
    }

    /// `"to have"` or `"not to have"`.
    pub const fn to_have(self) -> &'static str {
        match self {
            Polarity::Positive => "to have",
            Polarity::Inverse => "not to have",
        }
    }

    /// `"to"` or `"to not"`, used by the string predicates.
    pub const fn to(self) -> &'static str {
        match self {
            Polarity::Positive => "to",
            Polarity::Inverse => "to not",
        }
    }
}

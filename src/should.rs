//! `should()` and `should_not()` entry points
//!
//! # Example
//!
//! ```rust
//! use affirm::Should;
//!
//! let answer: i32 = 42;
//! answer.should().be(42);
//! answer.should_not().be_negative();
//!
//! "string".should().match_pattern("st*ng");
//! None::<u8>.should().be_null();
//! ```

use crate::operand::Text;
use crate::polarity::Polarity;
use crate::validator::Validator;
use rust_decimal::Decimal;

/// Start an assertion about a value.
pub trait Should: Sized {
    /// The type the validator wraps.
    type Subject;

    /// Turn the value into the validator's subject.
    fn into_subject(self) -> Self::Subject;

    /// A validator whose predicates must hold.
    fn should(self) -> Validator<Self::Subject> {
        Validator::with_polarity(self.into_subject(), Polarity::Positive)
    }

    /// A validator whose predicates must not hold.
    fn should_not(self) -> Validator<Self::Subject> {
        Validator::with_polarity(self.into_subject(), Polarity::Inverse)
    }
}

macro_rules! impl_should_operand {
    ($($ty:ty),+) => {
        $(
            impl Should for $ty {
                type Subject = $ty;

                #[inline]
                fn into_subject(self) -> $ty {
                    self
                }
            }

            impl Should for Option<$ty> {
                type Subject = Option<$ty>;

                #[inline]
                fn into_subject(self) -> Option<$ty> {
                    self
                }
            }
        )+
    };
}

impl_should_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Decimal, bool
);

macro_rules! impl_should_text {
    ($($lt:lifetime $ty:ty),+) => {
        $(
            impl<$lt> Should for $ty {
                type Subject = Text<$lt>;

                #[inline]
                fn into_subject(self) -> Text<$lt> {
                    Text::from(self)
                }
            }
        )+
    };
}

impl_should_text!(
    'a &'a str,
    'a &'a String,
    'a Option<&'a str>,
    'a Text<'a>
);

impl Should for String {
    type Subject = Text<'static>;

    fn into_subject(self) -> Text<'static> {
        Text::from(self)
    }
}

impl Should for Option<String> {
    type Subject = Text<'static>;

    fn into_subject(self) -> Text<'static> {
        Text::from(self)
    }
}

//! The value types a validator can wrap
//!
//! Numbers, booleans and their `Option` forms are [`Operand`]s: a validator
//! sees them through [`Operand::value`], where `None` stands for null. Strings
//! are wrapped in [`Text`], which has a null state of its own.
//!
//! The per-type tables ([`Number::ZERO`], [`Approximate::within`]) are the
//! only type-specific parts of the library; everything else is generic.

use crate::culture::Culture;
use crate::render::Render;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A non-string value a validator can wrap, possibly nullable.
pub trait Operand: PartialEq + Render {
    /// The underlying value type, with nullability stripped.
    type Value: PartialEq + Render;

    /// The value, or `None` when the operand is null.
    fn value(&self) -> Option<&Self::Value>;
}

/// Numeric value types: ordered, copyable, with a zero.
pub trait Number: Operand<Value = Self> + Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;
}

/// Numeric types compared with a tolerance.
pub trait Approximate: Number {
    /// Whether `|self - expected| <= tolerance`.
    fn within(self, expected: Self, tolerance: Self) -> bool;
}

/// Types with a null state.
pub trait Nullable: Render {
    /// Whether the value is null.
    fn is_null(&self) -> bool;
}

macro_rules! impl_operand {
    ($($ty:ty),+) => {
        $(
            impl Operand for $ty {
                type Value = $ty;

                #[inline]
                fn value(&self) -> Option<&$ty> {
                    Some(self)
                }
            }

            impl Operand for Option<$ty> {
                type Value = $ty;

                #[inline]
                fn value(&self) -> Option<&$ty> {
                    self.as_ref()
                }
            }
        )+
    };
}

macro_rules! impl_number {
    ($zero:expr; $($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

macro_rules! impl_approximate_float {
    ($($ty:ty),+) => {
        $(
            impl Approximate for $ty {
                #[inline]
                fn within(self, expected: Self, tolerance: Self) -> bool {
                    (self - expected).abs() <= tolerance
                }
            }
        )+
    };
}

impl_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Decimal, bool
);

impl_number!(0; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0; f32, f64);
impl_number!(Decimal::ZERO; Decimal);

impl_approximate_float!(f32, f64);

impl Approximate for Decimal {
    fn within(self, expected: Self, tolerance: Self) -> bool {
        // Overflowing differences are certainly outside any representable tolerance.
        self.checked_sub(expected)
            .is_some_and(|difference| difference.abs() <= tolerance)
    }
}

impl<T: Render> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// A string actual value, or the null string.
///
/// # Example
///
/// ```rust
/// use affirm::Text;
///
/// assert_eq!(Text::from("abc").as_str(), Some("abc"));
/// assert!(Text::null().is_null());
/// assert_eq!(Text::from(None::<String>), Text::null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Text<'a>(Option<Cow<'a, str>>);

impl<'a> Text<'a> {
    /// The null string.
    pub const fn null() -> Self {
        Text(None)
    }

    /// A non-null string.
    pub fn new(value: impl Into<Cow<'a, str>>) -> Self {
        Text(Some(value.into()))
    }

    /// The string, or `None` when null.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether this is the null string.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(value: &'a str) -> Self {
        Text::new(value)
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(value: &'a String) -> Self {
        Text::new(value.as_str())
    }
}

impl From<String> for Text<'_> {
    fn from(value: String) -> Self {
        Text::new(value)
    }
}

impl<'a> From<Cow<'a, str>> for Text<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Text(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Text<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Text(value.map(Cow::Borrowed))
    }
}

impl From<Option<String>> for Text<'_> {
    fn from(value: Option<String>) -> Self {
        Text(value.map(Cow::Owned))
    }
}

impl Render for Text<'_> {
    fn render(&self, _culture: &Culture) -> String {
        self.as_str().unwrap_or_default().to_owned()
    }
}

impl Nullable for Text<'_> {
    #[inline]
    fn is_null(&self) -> bool {
        Text::is_null(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_operands_expose_null() {
        assert_eq!(Some(3_u8).value(), Some(&3));
        assert_eq!(None::<u8>.value(), None);
        assert_eq!(7_i64.value(), Some(&7));
    }

    #[test]
    fn zeros() {
        assert_eq!(i32::ZERO, 0);
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(Decimal::ZERO, Decimal::from(0));
    }

    #[test]
    fn float_tolerance_is_inclusive() {
        assert!(1.0_f64.within(1.5, 0.5));
        assert!(!1.0_f64.within(1.5, 0.49));
        assert!(!f64::NAN.within(1.0, 10.0));
        assert!(2.0_f32.within(1.0, 1.0));
    }

    #[test]
    fn decimal_tolerance() {
        let a = Decimal::new(1005, 3);
        assert!(a.within(Decimal::ONE, Decimal::new(5, 3)));
        assert!(!a.within(Decimal::ONE, Decimal::new(4, 3)));
        assert!(!Decimal::MAX.within(Decimal::MIN, Decimal::MAX));
    }

    #[test]
    fn text_conversions() {
        let owned = String::from("x");
        assert_eq!(Text::from(&owned).as_str(), Some("x"));
        assert_eq!(Text::from(Some("y")).as_str(), Some("y"));
        assert!(Text::from(None::<&str>).is_null());
        assert_eq!(Text::from(""), Text::new(""));
        assert_ne!(Text::from(""), Text::null());
    }

    #[test]
    fn text_renders_null_as_empty() {
        assert_eq!(Text::null().render(&Culture::INVARIANT), "");
        assert_eq!(Text::from("a.b").render(&Culture::with_decimal_separator(',')), "a.b");
    }
}

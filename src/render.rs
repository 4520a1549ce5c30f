//! Rendering values into failure messages

use crate::culture::Culture;
use rust_decimal::Decimal;

/// How a value appears between the quotes of a failure message.
///
/// Integers render with `Display`. Fractional numbers render with `Display`
/// and the culture's decimal separator. Null renders as the empty string.
pub trait Render {
    /// Render the value under the given culture.
    fn render(&self, culture: &Culture) -> String;
}

macro_rules! impl_render_integer {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                #[inline]
                fn render(&self, _culture: &Culture) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

macro_rules! impl_render_fractional {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                #[inline]
                fn render(&self, culture: &Culture) -> String {
                    culture.localize(&self.to_string())
                }
            }
        )+
    };
}

impl_render_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);
impl_render_fractional!(f32, f64, Decimal);

impl Render for str {
    fn render(&self, _culture: &Culture) -> String {
        self.to_owned()
    }
}

impl Render for String {
    fn render(&self, _culture: &Culture) -> String {
        self.clone()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, culture: &Culture) -> String {
        self.as_ref()
            .map(|value| value.render(culture))
            .unwrap_or_default()
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, culture: &Culture) -> String {
        (**self).render(culture)
    }
}

/// Render a sequence as `"A", "B", "C"`.
pub(crate) fn quoted_list<'a, T, I>(values: I, culture: &Culture) -> String
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values
        .into_iter()
        .map(|value| format!("\"{}\"", value.render(culture)))
        .collect::<Vec<_>>()
        .join(", ")
}

use std::borrow::Cow;
use std::fmt;

use crate::bytes::render_bytes;

/// Values that can be turned into tokenizer input.
///
/// Implement this for domain types that need their own textual form; any
/// [`fmt::Display`] type can also be passed through [`Displayed`].
pub trait TokenSource {
    /// Canonical text that is split into tokens.
    fn token_text(&self) -> Cow<'_, str>;
}

impl TokenSource for str {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TokenSource for String {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TokenSource for Cow<'_, str> {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn token_text(&self) -> Cow<'_, str> {
        (**self).token_text()
    }
}

/// Absent input reads as empty text.
impl<T: TokenSource> TokenSource for Option<T> {
    fn token_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.token_text(),
            None => Cow::Borrowed(""),
        }
    }
}

/// No argument at all, same as empty text.
impl TokenSource for () {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

macro_rules! display_token_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TokenSource for $ty {
                fn token_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_token_source!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Debug keeps the decimal point on whole floats (`3.0`) and switches to
// exponent form for very large or small magnitudes (`1e16`, `1e-7`).
macro_rules! float_token_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TokenSource for $ty {
                fn token_text(&self) -> Cow<'_, str> {
                    Cow::Owned(format!("{self:?}"))
                }
            }
        )*
    };
}

float_token_source!(f32, f64);

impl TokenSource for [u8] {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Owned(render_bytes(self))
    }
}

impl<const N: usize> TokenSource for [u8; N] {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Owned(render_bytes(self))
    }
}

impl TokenSource for Vec<u8> {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Owned(render_bytes(self))
    }
}

/// Adapter that tokenizes a value through its `Display` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> TokenSource for Displayed<T> {
    fn token_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}

//! Conversion between native values and their stored text form
//!
//! Every value in a [`SettingsStore`](crate::SettingsStore) is kept as its
//! canonical text representation. The [`ToText`] / [`FromText`] pair defines
//! that representation for the built-in scalar types:
//!
//! - booleans are the literals `true` / `false`
//! - floating-point numbers use fixed notation with exactly 6 fractional
//!   digits (`3.123456789` is stored as `3.123457`)
//! - integers and `char` use their standard `Display` form
//! - strings are stored verbatim and never fail
//!
//! Types outside this set participate through caller-supplied converter
//! closures (`set_value_with` / `get_value_with`) rather than by implementing
//! the traits, so the store never needs to know about them.

/// Encode a value into its canonical stored text.
///
/// Returns `None` when the value has no text representation; the store then
/// reports the failure and writes nothing.
pub trait ToText {
    fn to_text(&self) -> Option<String>;
}

/// Decode a value from its stored text.
///
/// Decoding must consume the full text: trailing garbage is a failure, not
/// a partial success.
pub trait FromText: Sized {
    fn from_text(text: &str) -> Option<Self>;
}

impl<T: ToText + ?Sized> ToText for &T {
    fn to_text(&self) -> Option<String> {
        (**self).to_text()
    }
}

// =============================================================================
// Scalar Implementations
// =============================================================================

macro_rules! to_text_via_display {
    ($($ty:ty),* $(,)?) => {
        $(impl ToText for $ty {
            fn to_text(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

// bool's Display form is already the `true`/`false` literal pair.
to_text_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! to_text_fixed_point {
    ($($ty:ty),* $(,)?) => {
        $(impl ToText for $ty {
            fn to_text(&self) -> Option<String> {
                Some(format!("{self:.6}"))
            }
        })*
    };
}

to_text_fixed_point!(f32, f64);

impl ToText for str {
    fn to_text(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl ToText for String {
    fn to_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! from_text_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(impl FromText for $ty {
            fn from_text(text: &str) -> Option<Self> {
                text.parse().ok()
            }
        })*
    };
}

from_text_via_parse!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl FromText for String {
    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

// =============================================================================
// Tests
// =============================================================================

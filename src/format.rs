//! # Printing customization point
//!
//! [`Printable`] is the hook every printable value goes through. Std scalar
//! and string types print their natural `Display` form; user types either
//! implement the trait by hand or derive it:
//!
//! ```
//! use valsem::Printable;
//! use valsem::format::format;
//!
//! #[derive(Clone, Default, Printable)]
//! #[printable(with = celsius)]
//! struct Temperature(f32);
//!
//! fn celsius(t: &Temperature, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!     write!(f, "{:.1}°C", t.0)
//! }
//!
//! assert_eq!(format(&Temperature(21.0)), "21.0°C");
//! assert_eq!(format("plain"), "plain");
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Values that can be printed through the customization hook.
pub trait Printable {
    /// Write the textual representation of `self`.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `Display` adapter that routes through [`Printable::fmt_value`].
pub struct Printed<'a, T: ?Sized>(pub &'a T);

impl<T: Printable + ?Sized> fmt::Display for Printed<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_value(f)
    }
}

/// Return the representation of `obj` as a string, or the error its hook
/// reported.
pub fn try_format<T: Printable + ?Sized>(obj: &T) -> Result<String, fmt::Error> {
    use core::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", Printed(obj))?;
    Ok(out)
}

/// Return the representation of `obj` as a string.
///
/// # Panics
///
/// If the hook reports an error, like `alloc::format!`.
#[track_caller]
pub fn format<T: Printable + ?Sized>(obj: &T) -> String {
    match try_format(obj) {
        Ok(out) => out,
        Err(_) => panic!("a Printable implementation returned an error unexpectedly"),
    }
}

/// Print `obj` to stdout.
#[cfg(feature = "std")]
pub fn print<T: Printable + ?Sized>(obj: &T) {
    std::print!("{}", Printed(obj));
}

macro_rules! impl_printable_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                #[inline]
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_printable_display!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, str, String,
);

impl<T: Printable + ?Sized> Printable for &T {
    #[inline]
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(f)
    }
}

impl<T: Printable + ?Sized> Printable for Box<T> {
    #[inline]
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(f)
    }
}

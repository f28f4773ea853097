//! # Layer 3: Printable Values
//!
//! A closed polymorphic value type. [`PrintableValue`] is a protocol with two
//! operations: print yourself, and duplicate yourself. Any
//! [`Adaptable`](crate::concepts::Adaptable) type becomes a printable value
//! through [`PrintableValueAdapter`], and `Box<dyn PrintableValue>` is the
//! single concrete type that ranges over all of them.
//!
//! Value semantics come from the virtual copy: `Clone` for
//! `Box<dyn PrintableValue>` calls [`PrintableValue::clone_value`], and
//! `Default` clones the canonical null value, which prints nothing.
//!
//! Two printable values have the same value when their printed outputs are
//! equal. There is deliberately no `==`; use [`content_equals`].
//!
//! ```
//! use valsem::printable::{adapt, content_equals, PrintableValue};
//!
//! let mut source = String::from("hello");
//! let value = adapt(source.clone());
//! source.push_str(", world");
//!
//! let copy = value.clone();
//! assert_eq!(copy.to_output(), "hello");
//! assert!(content_equals(&*value, &*copy));
//!
//! let null = <dyn PrintableValue>::get_default();
//! assert_eq!(null.to_output(), "");
//! ```

mod adapter;
mod null;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

pub use adapter::PrintableValueAdapter;
pub use null::NullPrintableValue;

use crate::concepts::Adaptable;

/// An object with a printable value that can duplicate itself.
pub trait PrintableValue {
    /// Write the value to `out`.
    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Return a new, independently owned value equal to this one.
    fn clone_value(&self) -> Box<dyn PrintableValue>;
}

impl dyn PrintableValue {
    /// The canonical "null" value, which prints nothing.
    #[inline]
    pub fn default_ref() -> &'static dyn PrintableValue {
        &null::DEFAULT
    }

    /// A fresh, independently owned "null" value.
    ///
    /// Equivalent to `default_ref().clone_value()`.
    #[inline]
    pub fn get_default() -> Box<dyn PrintableValue> {
        Self::default_ref().clone_value()
    }
}

impl dyn PrintableValue + '_ {
    /// The printed output of this value, or the error its hook reported.
    pub fn try_to_output(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_value(&mut out)?;
        Ok(out)
    }

    /// The printed output of this value.
    ///
    /// # Panics
    ///
    /// If the value's hook reports an error, like `alloc::format!`.
    #[track_caller]
    pub fn to_output(&self) -> String {
        match self.try_to_output() {
            Ok(out) => out,
            Err(_) => panic!("a printable value returned an error unexpectedly"),
        }
    }

    /// Print this value to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{self}");
    }
}

impl Clone for Box<dyn PrintableValue> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_value()
    }
}

impl Default for Box<dyn PrintableValue> {
    #[inline]
    fn default() -> Self {
        <dyn PrintableValue>::get_default()
    }
}

impl fmt::Display for dyn PrintableValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_value(f)
    }
}

impl fmt::Debug for dyn PrintableValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrintableValue").field(&self.to_output()).finish()
    }
}

/// Whether `lhs` and `rhs` print the same output.
///
/// # Panics
///
/// If either hook reports an error; see [`to_output`](dyn PrintableValue::to_output).
#[track_caller]
pub fn content_equals(lhs: &dyn PrintableValue, rhs: &dyn PrintableValue) -> bool {
    lhs.to_output() == rhs.to_output()
}

/// Wrap `obj` into a boxed printable value.
#[inline]
pub fn adapt<T: Adaptable>(obj: T) -> Box<dyn PrintableValue> {
    Box::new(PrintableValueAdapter::new(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_heterogeneous_collection() {
        let values: Vec<Box<dyn PrintableValue>> =
            alloc::vec![adapt(1_u8), adapt(String::from("two")), adapt(3.5_f64), Box::default()];
        let outputs: Vec<String> = values.iter().map(|v| v.to_output()).collect();
        assert_eq!(outputs, ["1", "two", "3.5", ""]);

        let copies = values.clone();
        for (a, b) in values.iter().zip(copies.iter()) {
            assert!(content_equals(&**a, &**b));
        }
    }

    #[test]
    fn test_display_and_debug() {
        let v = adapt(7_i64);
        assert_eq!(alloc::format!("<{}>", v), "<7>");
        assert_eq!(alloc::format!("{:?}", v), "PrintableValue(\"7\")");
    }

    #[test]
    fn test_content_equality_ignores_type() {
        assert!(content_equals(&*adapt(12_u32), &*adapt(String::from("12"))));
        assert!(!content_equals(&*adapt(12_u32), &*adapt(13_u32)));
        assert!(content_equals(&*adapt(String::new()), <dyn PrintableValue>::default_ref()));
    }

    /// A value borrowing its text, so its trait object is not `'static`.
    struct Borrowed<'a>(&'a str);

    impl PrintableValue for Borrowed<'_> {
        fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
            out.write_str(self.0)
        }

        fn clone_value(&self) -> Box<dyn PrintableValue> {
            adapt(String::from(self.0))
        }
    }

    #[test]
    fn test_borrowed_values_compare() {
        let text = String::from("local");
        let a = Borrowed(&text);
        let b = Borrowed(text.as_str());
        let lhs: &dyn PrintableValue = &a;
        let rhs: &dyn PrintableValue = &b;
        assert!(content_equals(lhs, rhs));
        assert_eq!(lhs.to_output(), "local");
        assert_eq!(alloc::format!("{lhs}"), "local");
        assert!(content_equals(lhs, &*lhs.clone_value()));
    }

    /// A hook that writes part of its output and then fails.
    #[derive(Clone, Default)]
    struct Faulty;

    impl crate::format::Printable for Faulty {
        fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("ab")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_failing_hook_is_reported() {
        let faulty = adapt(Faulty);
        assert_eq!(faulty.try_to_output(), Err(fmt::Error));
        assert_eq!(adapt(String::from("ab")).try_to_output().as_deref(), Ok("ab"));
    }

    #[test]
    #[should_panic(expected = "returned an error")]
    fn test_failing_hook_panics_on_output() {
        let _ = adapt(Faulty).to_output();
    }

    #[test]
    #[should_panic(expected = "returned an error")]
    fn test_failing_hook_is_not_equal_to_partial_text() {
        let _ = content_equals(&*adapt(Faulty), &*adapt(String::from("ab")));
    }
}

use alloc::boxed::Box;
use core::fmt;

use super::PrintableValue;
use crate::concepts::Adaptable;
use crate::format::Printed;

/// Adapts a concrete `T` to the [`PrintableValue`] protocol.
///
/// Printing is routed through `T`'s [`Printable`](crate::format::Printable)
/// hook; cloning copies the adapted `T` and boxes the copy. `T` must be
/// semiregular, which is checked at compile time. A printable type without
/// `Default` is rejected:
///
/// ```compile_fail
/// use valsem::printable::PrintableValueAdapter;
///
/// #[derive(Clone, valsem::Printable)]
/// #[printable(empty)]
/// struct Label;
///
/// let _ = PrintableValueAdapter::new(Label);
/// ```
///
/// and so is a printable type without `Clone`:
///
/// ```compile_fail
/// use valsem::printable::PrintableValueAdapter;
///
/// #[derive(Default, valsem::Printable)]
/// #[printable(empty)]
/// struct Ticket;
///
/// let _ = PrintableValueAdapter::new(Ticket);
/// ```
///
/// while the same type with both is accepted:
///
/// ```
/// use valsem::printable::PrintableValueAdapter;
///
/// #[derive(Clone, Default, valsem::Printable)]
/// #[printable(empty)]
/// struct Ticket;
///
/// let _ = PrintableValueAdapter::new(Ticket);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrintableValueAdapter<T: Adaptable> {
    inner: T,
}

impl<T: Adaptable> PrintableValueAdapter<T> {
    /// Adapt `obj`. The adapter owns it from here on.
    #[inline]
    pub fn new(obj: T) -> Self {
        Self { inner: obj }
    }

    /// The adapted object.
    #[inline]
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Unwrap the adapted object.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Erase the concrete type.
    #[inline]
    pub fn into_value(self) -> Box<dyn PrintableValue> {
        Box::new(self)
    }
}

impl<T: Adaptable> From<T> for PrintableValueAdapter<T> {
    #[inline]
    fn from(obj: T) -> Self {
        Self::new(obj)
    }
}

impl<T: Adaptable> PrintableValue for PrintableValueAdapter<T> {
    fn write_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", Printed(&self.inner))
    }

    fn clone_value(&self) -> Box<dyn PrintableValue> {
        Box::new(Self::new(self.inner.clone()))
    }
}

use alloc::boxed::Box;
use core::fmt;

use super::PrintableValue;

/// The "null" printable value: prints nothing.
///
/// One canonical instance exists for the whole process, reachable through
/// `<dyn PrintableValue>::default_ref()`. Clones are fresh instances.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPrintableValue;

pub(super) static DEFAULT: NullPrintableValue = NullPrintableValue;

impl PrintableValue for NullPrintableValue {
    #[inline]
    fn write_value(&self, _out: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn PrintableValue> {
        Box::new(NullPrintableValue)
    }
}

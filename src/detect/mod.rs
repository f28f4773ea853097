//! # Layer 1: Concept Detection
//!
//! Compile-time boolean answers to "does this concrete type model concept X?".
//!
//! The concepts in [`crate::concepts`] are bounds: they reject a type at the
//! point of use. This module turns them into `const bool` values so they can
//! be inspected, asserted on, or combined.
//!
//! ## How it works
//!
//! For each concept `C` we generate:
//! 1. a fallback trait `CFallback` with `const IS_C: bool = false`,
//!    implemented for every `Detect<X>`;
//! 2. an inherent `const IS_C: bool = true` on `Detect<X>` where `X: C`.
//!
//! Resolving `Detect::<Concrete>::IS_C` finds the inherent const when the
//! bound holds and the trait const otherwise.
//!
//! ```
//! use valsem::prelude::*;
//!
//! assert!(Detect::<String>::IS_REGULAR);
//! assert!(Detect::<Vec<u8>>::IS_SEMIREGULAR);
//! assert!(!Detect::<std::sync::Mutex<i32>>::IS_COPYABLE);
//! ```
//!
//! ## Limitation
//!
//! Only **concrete types** are answered correctly. Inside `fn foo<T>()` the
//! inherent impl cannot be proven and the fallback (`false`) is chosen.

mod probe;

use core::marker::PhantomData;

use crate::concepts::{Copyable, EqualityComparable, Movable, Regular, Semiregular};
use crate::format::Printable;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a concept.
macro_rules! impl_detect {
    ($Concept:ident => $name:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Concept Fallback>] { const [<IS_ $name:upper>]: bool = false; }
            impl<T: ?Sized> [<$Concept Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Concept> Detect<T> { pub const [<IS_ $name:upper>]: bool = true; }
        }
    };
}

impl_detect!(Movable => movable);
impl_detect!(Copyable => copyable);
impl_detect!(Semiregular => semiregular);
impl_detect!(EqualityComparable => equality_comparable);
impl_detect!(Regular => regular);

// Printable means "semiregular and printable", not just "has the hook".
#[doc(hidden)]
pub trait PrintableFallback {
    const IS_PRINTABLE: bool = false;
}
impl<T: ?Sized> PrintableFallback for Detect<T> {}
impl<T: Semiregular + Printable> Detect<T> {
    pub const IS_PRINTABLE: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Clone, PartialEq)]
    struct NoDefault(u8);

    #[derive(Default)]
    struct NoClone;

    #[test]
    fn test_primitives_are_regular() {
        assert!(Detect::<i32>::IS_REGULAR);
        assert!(Detect::<bool>::IS_REGULAR);
        assert!(Detect::<f64>::IS_REGULAR);
        assert!(Detect::<String>::IS_REGULAR);
        assert!(Detect::<Vec<String>>::IS_REGULAR);
    }

    #[test]
    fn test_partial_hierarchy() {
        assert!(Detect::<NoDefault>::IS_COPYABLE);
        assert!(Detect::<NoDefault>::IS_EQUALITY_COMPARABLE);
        assert!(!Detect::<NoDefault>::IS_SEMIREGULAR);
        assert!(!Detect::<NoDefault>::IS_REGULAR);

        assert!(Detect::<NoClone>::IS_MOVABLE);
        assert!(!Detect::<NoClone>::IS_COPYABLE);
        assert!(!Detect::<NoClone>::IS_EQUALITY_COMPARABLE);
    }

    #[test]
    fn test_unsized_is_not_movable() {
        assert!(!Detect::<str>::IS_MOVABLE);
        assert!(Detect::<str>::IS_EQUALITY_COMPARABLE);
    }

    #[test]
    fn test_printable_detection() {
        assert!(Detect::<String>::IS_PRINTABLE);
        assert!(Detect::<u8>::IS_PRINTABLE);
        assert!(!Detect::<Vec<u8>>::IS_PRINTABLE);
        assert!(!Detect::<NoDefault>::IS_PRINTABLE);
    }
}

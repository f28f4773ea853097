//! # Single-trait probe
//!
//! `has_impl!` is the low-level building block behind `satisfies!`: it asks
//! whether one concrete type implements one trait, using the same
//! inherent-const fallback as [`Detect`](super::Detect).
//!
//! ```
//! use valsem::has_impl;
//!
//! trait Shape {}
//! struct Square;
//! impl Shape for Square {}
//!
//! assert!(has_impl!(Square, Shape));
//! assert!(!has_impl!(String, Shape));
//! ```

/// Check if a concrete type implements a trait at compile time.
///
/// An inherent const shadows a trait const when the bound is satisfied.
///
/// **Note**: Only works for concrete types. For generic contexts use the
/// concepts in [`crate::concepts`] as bounds instead.
///
/// ```
/// use valsem::has_impl;
/// use valsem::concepts::Regular;
///
/// assert!(has_impl!(String, Regular));
/// assert!(!has_impl!(String, Copy));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

//! # Layer 0: Concepts
//!
//! Structural capability predicates used to constrain what the handles and
//! the printable adapter accept. Every concept is a marker trait with a
//! blanket implementation, so a type models a concept exactly when it
//! supports the underlying operations. Nothing is opted into by hand.
//!
//! ```text
//! Movable ─── Copyable ─── Semiregular ─┬─ Regular
//!                                       │      ▲
//! EqualityComparable ───────────────────┼──────┘
//!                                       └─ Adaptable (+ Printable + 'static)
//! ```
//!
//! | Concept | Requires |
//! |---------|----------|
//! | `Movable` | an object type (`Sized`); move-construct, move-assign and swap are built into the language |
//! | `Copyable` | `Movable + Clone` |
//! | `Semiregular` | `Copyable + Default` |
//! | `EqualityComparable` | `PartialEq` (`==` and `!=` both yield `bool`) |
//! | `Regular` | `Semiregular + EqualityComparable` |
//! | `Adaptable` | `Semiregular + Printable + 'static` |
//!
//! For a boolean answer on a concrete type, see [`crate::detect`] and the
//! `satisfies!` macro.

use crate::format::Printable;

/// An object type that can be moved, move-assigned and swapped.
///
/// In Rust every sized type qualifies: moves are bitwise and always
/// available, and `core::mem::swap` works for any `T`.
pub trait Movable: Sized {}
impl<T> Movable for T {}

/// A movable type that can also be duplicated.
pub trait Copyable: Movable + Clone {}
impl<T: Clone> Copyable for T {}

/// A copyable type with a default value.
pub trait Semiregular: Copyable + Default {}
impl<T: Clone + Default> Semiregular for T {}

/// A type whose values can be compared with `==` and `!=`.
pub trait EqualityComparable: PartialEq {}
impl<T: PartialEq + ?Sized> EqualityComparable for T {}

/// A semiregular type that is also equality comparable.
pub trait Regular: Semiregular + EqualityComparable {}
impl<T: Clone + Default + PartialEq> Regular for T {}

/// A semiregular, printable, owned type: what `PrintableValueAdapter` wraps.
pub trait Adaptable: Semiregular + Printable + 'static {}
impl<T: Clone + Default + Printable + 'static> Adaptable for T {}

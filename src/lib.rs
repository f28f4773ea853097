#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, stdout printing and floating-point survival models
// - detect: const predicate detection (Detect::<T>::IS_*)

//! # valsem
//!
//! **Value-semantic wrapper types for Rust.**
//!
//! Types that behave like ordinary values (copyable, movable, comparable by
//! content) while hiding an implementation that is heap-allocated, stored
//! in place, or polymorphic.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Concepts & Printing Hook                                |
//! |  - Movable, Copyable, Semiregular, EqualityComparable, Regular    |
//! |  - Printable (customization point), format, print                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Detection                                               |
//! |  - Detect::<T>::IS_* consts, has_impl!, satisfies!                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Handles                                                 |
//! |  - OpaqueHandle<Body>        (always boxed)                       |
//! |  - InlineHandle<Body, SIZE>  (in place if it fits, else boxed)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Printable Values                                        |
//! |  - PrintableValue protocol, PrintableValueAdapter<T>, null value  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! The [`survival`] module is independent of the layers above.
//!
//! ## Quick Start
//!
//! ```
//! use valsem::prelude::*;
//!
//! // A public type hiding its implementation behind a handle.
//! #[derive(Clone, Default)]
//! pub struct Account {
//!     body: InlineHandle<AccountBody>,
//! }
//!
//! #[derive(Clone, Default)]
//! struct AccountBody {
//!     balance: i64,
//! }
//!
//! impl Account {
//!     pub fn deposit(&mut self, amount: i64) { self.body.balance += amount; }
//!     pub fn balance(&self) -> i64 { self.body.balance }
//! }
//!
//! let mut a = Account::default();
//! a.deposit(10);
//! let b = a.clone();
//! a.deposit(5);
//! assert_eq!((a.balance(), b.balance()), (15, 10));
//!
//! // Printable values of any type, behind one concrete type.
//! let values: Vec<Box<dyn PrintableValue>> = vec![adapt(1), adapt(String::from("x"))];
//! assert!(satisfies!(String: Regular & !Copy));
//! assert_eq!(values[1].clone().to_output(), "x");
//! ```

// Allow `::valsem` to work inside the crate itself
extern crate self as valsem;

extern crate alloc;

// =============================================================================
// Layer 0: Concepts & Printing Hook
// =============================================================================
pub mod concepts;
pub mod format;

// =============================================================================
// Layer 1: Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 2: Handles
// =============================================================================
pub mod handle;

// =============================================================================
// Layer 3: Printable Values
// =============================================================================
pub mod printable;

// =============================================================================
// Independent: Survival Probabilities
// =============================================================================
pub mod survival;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use concepts::{Adaptable, Copyable, EqualityComparable, Movable, Regular, Semiregular};
pub use format::Printable;
pub use handle::{InlineHandle, OpaqueHandle, StorageMode, DEFAULT_SIZE};
pub use printable::{adapt, content_equals, PrintableValue, PrintableValueAdapter};

// Re-export proc-macros
pub use macros::{satisfies, Printable};

/// Common items for the toolkit.
pub mod prelude {
    pub use crate::concepts::{Adaptable, Copyable, EqualityComparable, Movable, Regular, Semiregular};
    #[cfg(feature = "detect")]
    pub use crate::detect::{
        CopyableFallback, Detect, EqualityComparableFallback, MovableFallback, PrintableFallback,
        RegularFallback, SemiregularFallback,
    };
    pub use crate::format::Printable;
    pub use crate::handle::{InlineHandle, OpaqueHandle, StorageMode};
    pub use crate::printable::{adapt, content_equals, PrintableValue, PrintableValueAdapter};
    pub use macros::{satisfies, Printable};
}

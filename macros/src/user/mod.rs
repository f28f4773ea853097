//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `satisfies!` | function macro | Compile-time concept check |
//! | `#[derive(Printable)]` | on struct/enum | Implement the printing hook |

mod printable;
mod satisfies;

pub use printable::expand_derive_printable;
pub use satisfies::{expand_satisfies, SatisfiesInput};

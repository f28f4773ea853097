//! Procedural macros for the valsem value-semantics toolkit
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `satisfies!` | - | Check types against concept expressions |
//! | `#[derive(Printable)]` | struct/enum | Implement `valsem::format::Printable` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Default, Debug, Printable)]
//! #[printable(debug)]
//! struct Point { x: i32, y: i32 }
//!
//! const OK: bool = satisfies!(Point: Semiregular & Printable & !Copy);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Check, at compile time, whether types satisfy concept expressions.
///
/// Expands to a `bool` expression usable in `const` context.
///
/// # Syntax
///
/// `satisfies!(Type: Expr, Type: Expr, ...)` where `Expr` combines trait
/// bounds with `&`, `|`, `!` and parentheses. The result is `true` only if
/// every clause holds.
///
/// The concept names `Movable`, `Copyable`, `Semiregular`,
/// `EqualityComparable`, `Regular`, `Adaptable` and `Printable` resolve to
/// the valsem definitions; any other bound is used as written.
///
/// # Example
///
/// ```ignore
/// assert!(satisfies!(String: Regular & !Copy));
/// assert!(satisfies!(i32: Regular, Vec<u8>: Semiregular));
/// ```
///
/// Checks are made on concrete types. Inside a generic function a type
/// parameter only satisfies what the probe can see, which is nothing.
#[proc_macro]
pub fn satisfies(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SatisfiesInput);
    user::expand_satisfies(input).into()
}

/// Derive the `Printable` printing hook.
///
/// # Attributes
///
/// - (none) or `#[printable(display)]`: print through `Display`
/// - `#[printable(debug)]`: print through `Debug`
/// - `#[printable(with = path)]`: call `path(&self, f)`; a string literal
///   path is also accepted
/// - `#[printable(empty)]`: print nothing
///
/// # Example
///
/// ```ignore
/// fn celsius(t: &Temperature, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///     write!(f, "{:.1}°C", t.0)
/// }
///
/// #[derive(Clone, Default, Printable)]
/// #[printable(with = celsius)]
/// struct Temperature(f32);
/// ```
#[proc_macro_derive(Printable, attributes(printable))]
pub fn derive_printable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_printable(input).into()
}

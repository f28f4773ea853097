//! `#[derive(Printable)]` strategies.

use std::fmt;

use valsem::format::format;
use valsem::prelude::*;

#[derive(Clone, Default, Printable)]
struct Name(String);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug, Default, Printable)]
#[printable(debug)]
struct Pair {
    left: u8,
    right: u8,
}

fn bracketed<T: fmt::Display>(w: &Wrapped<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", w.0)
}

#[derive(Clone, Default, Printable)]
#[printable(with = bracketed)]
struct Wrapped<T: fmt::Display>(T);

mod render {
    pub fn percent(p: &super::Ratio, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", p.0 * 100 / p.1.max(1))
    }
}

#[derive(Clone, Default, Printable)]
#[printable(with = "render::percent")]
struct Ratio(u32, u32);

#[derive(Clone, Default, Printable)]
#[printable(empty)]
struct Silent;

#[derive(Clone, Copy, Debug, Default, Printable)]
#[printable(debug)]
enum Level {
    #[default]
    Low,
    High,
}

#[test]
fn test_display_is_default_strategy() {
    assert_eq!(format(&Name("x".into())), "<x>");
}

#[test]
fn test_debug_strategy() {
    assert_eq!(format(&Pair { left: 1, right: 2 }), "Pair { left: 1, right: 2 }");
    assert_eq!(format(&Level::High), "High");
}

#[test]
fn test_with_strategy_on_generic_type() {
    assert_eq!(format(&Wrapped(7)), "[7]");
    assert_eq!(format(&Wrapped("s")), "[s]");
}

#[test]
fn test_with_strategy_from_string_path() {
    assert_eq!(format(&Ratio(1, 4)), "25%");
}

#[test]
fn test_empty_strategy() {
    assert_eq!(format(&Silent), "");
}

#[test]
fn test_derived_types_adapt() {
    let values = vec![adapt(Name("n".into())), adapt(Level::default()), adapt(Silent)];
    let outputs: Vec<String> = values.iter().map(|v| v.to_output()).collect();
    assert_eq!(outputs, ["<n>", "Low", ""]);
}

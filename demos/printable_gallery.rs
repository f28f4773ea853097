//! Printable Gallery
//!
//! Values of unrelated types stored in one vector as
//! `Box<dyn PrintableValue>`, copied as a whole, and compared by what they
//! print.

use std::fmt;

use valsem::prelude::*;

#[derive(Clone, Default, Printable)]
#[printable(with = show_money)]
struct Money {
    cents: i64,
}

fn show_money(m: &Money, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "${}.{:02}", m.cents / 100, m.cents % 100)
}

#[derive(Clone, Debug, Default, Printable)]
#[printable(debug)]
struct Coordinates {
    lat: f32,
    lon: f32,
}

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!(
        money = satisfies!(Money: Adaptable),
        coordinates = satisfies!(Coordinates: Adaptable & !EqualityComparable),
        "concept checks"
    );

    let gallery: Vec<Box<dyn PrintableValue>> = vec![
        adapt(42),
        adapt(String::from("forty-two")),
        adapt(Money { cents: 4200 }),
        adapt(Coordinates { lat: 42.0, lon: -71.0 }),
        Box::default(),
    ];

    let copy = gallery.clone();
    for (index, (a, b)) in gallery.iter().zip(&copy).enumerate() {
        tracing::info!(index, value = %a, same = content_equals(&**a, &**b), "entry");
    }

    let answer = adapt(String::from("42"));
    let matches = gallery.iter().filter(|v| content_equals(&***v, &*answer)).count();
    tracing::info!(matches, "entries printing as 42");

    for value in &gallery {
        value.print();
        println!();
    }
}

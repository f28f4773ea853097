//! Shared fixtures for the handle tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// A body that counts how many of its instances have been dropped.
#[derive(Debug, Default)]
pub struct Tracked {
    pub value: i32,
    pub drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self { value, drops: Rc::clone(drops) }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self { value: self.value, drops: Rc::clone(&self.drops) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// A body whose copy panics when `explode` is set.
///
/// Larger than 8 bytes, so an 8-byte buffer boxes it.
#[derive(Debug, Default, PartialEq)]
pub struct Fragile {
    pub value: i64,
    pub explode: bool,
}

impl Fragile {
    pub fn new(value: i64) -> Self {
        Self { value, explode: false }
    }

    pub fn exploding(value: i64) -> Self {
        Self { value, explode: true }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.explode {
            panic!("copy of fragile body {}", self.value);
        }
        Self { value: self.value, explode: false }
    }
}

/// A body too large for a 16-byte buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Large {
    pub bytes: [u8; 64],
}

impl Default for Large {
    fn default() -> Self {
        Self { bytes: [0; 64] }
    }
}

impl Large {
    pub fn filled(byte: u8) -> Self {
        Self { bytes: [byte; 64] }
    }
}

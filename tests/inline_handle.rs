//! InlineHandle: one contract, two storage modes.
//!
//! Most tests are written once over `SIZE` and run for a size that stores
//! the body in place and a size that forces it onto the heap.

mod common;

use std::cell::Cell;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use common::{Fragile, Large, Tracked};
use valsem::{InlineHandle, StorageMode};

/// Run a generic test body for an in-place and a boxed instantiation.
macro_rules! both_modes {
    ($name:ident => $body:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn in_place() {
                $body::<32>(StorageMode::InPlace);
            }

            #[test]
            fn boxed() {
                $body::<8>(StorageMode::Boxed);
            }
        }
    };
}

// ============================================================================
// Shared contract
// ============================================================================

fn copies_are_independent<const SIZE: usize>(mode: StorageMode) {
    let mut a: InlineHandle<String, SIZE> = InlineHandle::new("seed".into());
    assert_eq!(a.storage_mode(), mode);

    let b = a.clone();
    a.push('!');
    assert_eq!(*a, "seed!");
    assert_eq!(*b, "seed");
}
both_modes!(copy_independence => copies_are_independent);

fn clone_from_rolls_back<const SIZE: usize>(mode: StorageMode) {
    let mut dest: InlineHandle<Fragile, SIZE> = InlineHandle::new(Fragile::new(1));
    let source: InlineHandle<Fragile, SIZE> = InlineHandle::new(Fragile::exploding(2));
    assert_eq!(InlineHandle::<Fragile, SIZE>::MODE, mode);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| dest.clone_from(&source)));
    assert!(outcome.is_err());
    assert_eq!(*dest, Fragile::new(1));
}
both_modes!(copy_rollback => clone_from_rolls_back);

fn try_assign_rolls_back<const SIZE: usize>(_mode: StorageMode) {
    let mut dest: InlineHandle<String, SIZE> = InlineHandle::new("kept".into());
    let source: InlineHandle<String, SIZE> = InlineHandle::new("offered".into());

    let result = dest.try_assign_with(&source, |_| Err(()));
    assert_eq!(result, Err(()));
    assert_eq!(*dest, "kept");

    dest.try_assign_with(&source, |s| Ok::<_, ()>(s.to_uppercase())).unwrap();
    assert_eq!(*dest, "OFFERED");
}
both_modes!(assign_rollback => try_assign_rolls_back);

fn every_body_dropped_once<const SIZE: usize>(_mode: StorageMode) {
    let drops = Rc::new(Cell::new(0));
    {
        let a: InlineHandle<Tracked, SIZE> = InlineHandle::new(Tracked::new(1, &drops));
        let mut b = a.clone();
        let c = b.transfer();
        let mut d: InlineHandle<Tracked, SIZE> = InlineHandle::new(Tracked::new(2, &drops));
        d.clone_from(&c);
        assert_eq!(d.value, 1);
    }
    // a, c, d, the value replaced in d. A moved-from in-place `b` holds a
    // default body whose counter is its own.
    assert_eq!(drops.get(), 4);
}
both_modes!(drop_accounting => every_body_dropped_once);

fn equality_and_hash<const SIZE: usize>(_mode: StorageMode) {
    let a: InlineHandle<String, SIZE> = InlineHandle::new("same".into());
    let b = a.clone();
    let c: InlineHandle<String, SIZE> = InlineHandle::new("other".into());
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}
both_modes!(equality => equality_and_hash);

fn into_inner_returns_body<const SIZE: usize>(_mode: StorageMode) {
    let h: InlineHandle<String, SIZE> = InlineHandle::from(String::from("out"));
    assert_eq!(h.into_inner().as_deref(), Some("out"));
}
both_modes!(unwrap => into_inner_returns_body);

// ============================================================================
// Moved-from asymmetry
// ============================================================================

#[test]
fn test_in_place_transfer_leaves_default_body() {
    let mut source: InlineHandle<Vec<i32>, 32> = InlineHandle::new(vec![1, 2, 3]);
    let dest = source.transfer();

    assert_eq!(*dest, [1, 2, 3]);
    assert!(!source.is_moved_from());
    assert!(source.is_empty());

    // Still a usable value.
    source.push(4);
    assert_eq!(*source, [4]);
}

#[test]
fn test_boxed_transfer_leaves_empty_handle() {
    let mut source: InlineHandle<Vec<i32>, 8> = InlineHandle::new(vec![1, 2, 3]);
    let dest = source.transfer();

    assert_eq!(*dest, [1, 2, 3]);
    assert!(source.is_moved_from());
    assert_eq!(source.get(), None);

    // Copying an empty handle yields an empty handle.
    assert!(source.clone().is_moved_from());
    assert_eq!(format!("{source:?}"), "InlineHandle(<moved-from>)");
}

#[test]
#[should_panic(expected = "moved-from InlineHandle")]
fn test_deref_of_empty_boxed_handle_panics() {
    let mut source: InlineHandle<Large, 16> = InlineHandle::default();
    let _taken = source.transfer();
    let _first: u8 = source.bytes[0];
}

#[test]
fn test_move_assign_both_modes() {
    let mut small_dest: InlineHandle<String, 32> = InlineHandle::new("a".into());
    let mut small_src: InlineHandle<String, 32> = InlineHandle::new("b".into());
    small_dest.move_assign_from(&mut small_src);
    assert_eq!(*small_dest, "b");
    assert_eq!(*small_src, "");

    let mut large_dest: InlineHandle<Large, 16> = InlineHandle::new(Large::filled(1));
    let mut large_src: InlineHandle<Large, 16> = InlineHandle::new(Large::filled(2));
    large_dest.move_assign_from(&mut large_src);
    assert_eq!(*large_dest, Large::filled(2));
    assert!(large_src.is_moved_from());

    // A moved-from handle accepts a new value.
    large_src.clone_from(&large_dest);
    assert_eq!(*large_src, Large::filled(2));
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_mode_selection() {
    assert!(InlineHandle::<i32, 16>::FITS);
    assert!(!InlineHandle::<Large, 16>::FITS);

    let small: InlineHandle<i32, 16> = InlineHandle::default();
    let large: InlineHandle<Large, 16> = InlineHandle::default();
    assert!(small.is_inline());
    assert!(!large.is_inline());
    assert_eq!(*large, Large::default());
}

#[test]
fn test_handle_has_buffer_footprint() {
    assert_eq!(size_of::<InlineHandle<i32, 16>>(), 16);
    assert_eq!(size_of::<InlineHandle<Large, 16>>(), 16);
    assert_eq!(size_of::<InlineHandle<u8, 64>>(), 64);
}

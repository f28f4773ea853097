//! # Layer 2: Handles
//!
//! The handle/body idiom: a public `Handle` type owns exactly one private
//! `Body` and gives it value semantics. Copying a handle deep-copies the body,
//! moving a handle transfers it, dropping a handle destroys it.
//!
//! Two handles share one contract and differ only in storage:
//!
//! | Handle | Body lives | Allocation |
//! |--------|-----------|------------|
//! | [`OpaqueHandle<Body>`] | always on the heap | one per owned body |
//! | [`InlineHandle<Body, SIZE>`] | in a `SIZE`-byte buffer if it fits, else on the heap | none when inline |
//!
//! ```
//! use valsem::handle::{InlineHandle, OpaqueHandle, StorageMode};
//!
//! let mut a: OpaqueHandle<Vec<i32>> = OpaqueHandle::new(vec![1, 2]);
//! let b = a.clone();
//! a.push(3);
//! assert_eq!(*b, [1, 2]);
//!
//! let small: InlineHandle<u64, 16> = InlineHandle::default();
//! let large: InlineHandle<[u8; 64], 16> = InlineHandle::new([0u8; 64]);
//! assert_eq!(small.storage_mode(), StorageMode::InPlace);
//! assert_eq!(large.storage_mode(), StorageMode::Boxed);
//! ```
//!
//! ## Moved-from handles
//!
//! Besides native Rust moves, both handles support the explicit
//! [`transfer`](OpaqueHandle::transfer) and `move_assign_from` operations,
//! which leave the source in a *moved-from* state. A boxed body leaves an
//! empty handle behind; an in-place body leaves a live default body behind.
//! Accessing an empty handle through `Deref` panics.

mod inline;
mod opaque;
mod storage;

pub use inline::InlineHandle;
pub use opaque::OpaqueHandle;

/// Default inline capacity: four pointer widths.
pub const DEFAULT_SIZE: usize = 4 * core::mem::size_of::<usize>();

/// Where an [`InlineHandle`] keeps its body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageMode {
    /// The body lives directly inside the handle's buffer.
    InPlace,
    /// The buffer holds an owning box; the body lives on the heap.
    Boxed,
}

#[cold]
#[inline(never)]
#[track_caller]
fn moved_from_access(handle: &'static str) -> ! {
    panic!("accessed the body of a moved-from {handle}")
}

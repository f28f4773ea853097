//! Small-buffer handle.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};

use super::storage::{fits, Boxed, Buffer, InPlace, Representation};
use super::{moved_from_access, StorageMode, DEFAULT_SIZE};

/// Run `$op` on whichever representation this instantiation uses.
///
/// `FITS` is an associated constant, so after monomorphization only one arm
/// survives; there is no runtime discriminant.
macro_rules! dispatch {
    ($this:ty, $op:ident ( $($arg:expr),* )) => {
        if <$this>::FITS {
            <InPlace as Representation<Body>>::$op($($arg),*)
        } else {
            <Boxed as Representation<Body>>::$op($($arg),*)
        }
    };
}

/// A handle storing its `Body` inside a `SIZE`-byte buffer when it fits,
/// and behind an owning box in that buffer otherwise.
///
/// The choice is made once per `(Body, SIZE)` at compile time; see
/// [`InlineHandle::FITS`]. Both modes share one contract: deep copies,
/// cheap transfers, deterministic drop.
///
/// ```
/// use valsem::handle::{InlineHandle, StorageMode};
///
/// let mut h: InlineHandle<String> = InlineHandle::new("inline".into());
/// assert_eq!(h.storage_mode(), StorageMode::InPlace);
///
/// let moved = h.transfer();
/// assert_eq!(*moved, "inline");
/// // In-place bodies are left in their moved-from (default) state.
/// assert_eq!(*h, "");
/// ```
///
/// `SIZE` must hold at least a pointer:
///
/// ```compile_fail
/// use valsem::handle::InlineHandle;
/// let h: InlineHandle<[u8; 64], 2> = InlineHandle::default();
/// ```
pub struct InlineHandle<Body, const SIZE: usize = DEFAULT_SIZE> {
    storage: Buffer<SIZE>,
    _body: PhantomData<Body>,
}

impl<Body, const SIZE: usize> InlineHandle<Body, SIZE> {
    /// Whether `Body` is stored in place for this `SIZE`.
    pub const FITS: bool = fits::<Body, SIZE>();

    /// Storage mode of this instantiation.
    pub const MODE: StorageMode = if Self::FITS { StorageMode::InPlace } else { StorageMode::Boxed };

    const ADMISSIBLE: () = {
        assert!(
            SIZE >= mem::size_of::<usize>(),
            "InlineHandle: SIZE must be large enough to hold a pointer"
        );
        assert!(
            Self::FITS || Boxed::admits::<Body, SIZE>(),
            "InlineHandle: storage cannot hold an owning pointer"
        );
    };

    /// A handle whose storage holds nothing yet.
    ///
    /// Wrapped in `ManuallyDrop` until a representation has been emplaced,
    /// so an unwinding body constructor never drops uninitialised storage.
    #[inline]
    fn vacant() -> ManuallyDrop<Self> {
        let () = Self::ADMISSIBLE;
        ManuallyDrop::new(Self { storage: Buffer::uninit(), _body: PhantomData })
    }

    /// Create a handle owning `body`.
    #[inline]
    pub fn new(body: Body) -> Self {
        let mut this = Self::vacant();
        // SAFETY: `this.storage` is vacant and the layout was checked by `ADMISSIBLE`.
        unsafe { dispatch!(Self, emplace(&mut this.storage, body)) };
        ManuallyDrop::into_inner(this)
    }

    /// Create a handle from a fallible body constructor.
    ///
    /// The constructor's error is returned unchanged; nothing is allocated
    /// when it fails.
    pub fn try_new_with<E>(make: impl FnOnce() -> Result<Body, E>) -> Result<Self, E> {
        make().map(Self::new)
    }

    /// Deep-copy this handle with a fallible body copy.
    ///
    /// A moved-from boxed handle copies to a moved-from handle without
    /// calling `copy`.
    pub fn try_clone_with<E>(&self, copy: impl FnOnce(&Body) -> Result<Body, E>) -> Result<Self, E> {
        let mut this = Self::vacant();
        // SAFETY: `this.storage` is vacant, `self.storage` is live.
        unsafe { dispatch!(Self, emplace_copy(&mut this.storage, &self.storage, copy)) }?;
        Ok(ManuallyDrop::into_inner(this))
    }

    /// Copy-assign from `other` using a fallible body copy.
    ///
    /// On error `self` is left exactly as it was.
    pub fn try_assign_with<E>(
        &mut self,
        other: &Self,
        copy: impl FnOnce(&Body) -> Result<Body, E>,
    ) -> Result<(), E> {
        let tmp = other.try_clone_with(copy)?;
        *self = tmp;
        Ok(())
    }

    /// Move the body out into a new handle, leaving `self` moved-from.
    ///
    /// A boxed body leaves `self` empty. An in-place body cannot be removed
    /// without destroying the slot, so `self` keeps a `Body::default()`.
    ///
    /// `Body: Default` is required in both modes, boxed included, because
    /// the bound cannot depend on `FITS`. Use a native move or
    /// [`into_inner`](Self::into_inner) for a boxed body without `Default`.
    #[inline]
    pub fn transfer(&mut self) -> Self
    where
        Body: Default,
    {
        let mut this = Self::vacant();
        // SAFETY: `this.storage` is vacant, `self.storage` is live.
        unsafe { dispatch!(Self, emplace_transfer(&mut this.storage, &mut self.storage)) };
        ManuallyDrop::into_inner(this)
    }

    /// Move-assign from `other`, leaving `other` moved-from.
    ///
    /// Moved-from states and the `Body: Default` requirement are as for
    /// [`transfer`](Self::transfer).
    #[inline]
    pub fn move_assign_from(&mut self, other: &mut Self)
    where
        Body: Default,
    {
        // SAFETY: both buffers are live.
        unsafe { dispatch!(Self, move_assign(&mut self.storage, &mut other.storage)) }
    }

    /// Whether this handle owns no body.
    ///
    /// Always `false` in place: a moved-from in-place slot still holds a body.
    #[inline]
    pub fn is_moved_from(&self) -> bool {
        self.get().is_none()
    }

    /// Borrow the body, or `None` if moved-from.
    #[inline]
    pub fn get(&self) -> Option<&Body> {
        // SAFETY: `self.storage` is live for the lifetime of `self`.
        unsafe { dispatch!(Self, get(&self.storage)) }
    }

    /// Mutably borrow the body, or `None` if moved-from.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut Body> {
        // SAFETY: `self.storage` is live for the lifetime of `self`.
        unsafe { dispatch!(Self, get_mut(&mut self.storage)) }
    }

    /// Unwrap the body.
    pub fn into_inner(self) -> Option<Body> {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: the storage is live and `this` is never dropped afterwards.
        unsafe { dispatch!(Self, take_out(&mut this.storage)) }
    }

    /// Where the body of this handle lives.
    #[inline]
    pub const fn storage_mode(&self) -> StorageMode {
        Self::MODE
    }

    /// Whether the body lives inside the handle.
    #[inline]
    pub const fn is_inline(&self) -> bool {
        Self::FITS
    }
}

impl<Body, const SIZE: usize> Drop for InlineHandle<Body, SIZE> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: the storage is live until this point.
        unsafe { dispatch!(Self, drop_in_place(&mut self.storage)) }
    }
}

impl<Body: Default, const SIZE: usize> Default for InlineHandle<Body, SIZE> {
    #[inline]
    fn default() -> Self {
        Self::new(Body::default())
    }
}

impl<Body, const SIZE: usize> From<Body> for InlineHandle<Body, SIZE> {
    #[inline]
    fn from(body: Body) -> Self {
        Self::new(body)
    }
}

impl<Body: Clone, const SIZE: usize> Clone for InlineHandle<Body, SIZE> {
    fn clone(&self) -> Self {
        match self.try_clone_with(|body| Ok::<_, core::convert::Infallible>(body.clone())) {
            Ok(copy) => copy,
            Err(never) => match never {},
        }
    }

    /// Copy-and-swap: if the copy panics, `self` is untouched.
    fn clone_from(&mut self, source: &Self) {
        let tmp = source.clone();
        *self = tmp;
    }
}

impl<Body, const SIZE: usize> Deref for InlineHandle<Body, SIZE> {
    type Target = Body;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &Body {
        match self.get() {
            Some(body) => body,
            None => moved_from_access("InlineHandle"),
        }
    }
}

impl<Body, const SIZE: usize> DerefMut for InlineHandle<Body, SIZE> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Body {
        match self.get_mut() {
            Some(body) => body,
            None => moved_from_access("InlineHandle"),
        }
    }
}

impl<Body: fmt::Debug, const SIZE: usize> fmt::Debug for InlineHandle<Body, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(body) => f.debug_tuple("InlineHandle").field(body).finish(),
            None => f.write_str("InlineHandle(<moved-from>)"),
        }
    }
}

impl<Body: PartialEq, const SIZE: usize> PartialEq for InlineHandle<Body, SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Body: Eq, const SIZE: usize> Eq for InlineHandle<Body, SIZE> {}

impl<Body: Hash, const SIZE: usize> Hash for InlineHandle<Body, SIZE> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

//! Heap-owning handle.

use alloc::boxed::Box;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use super::moved_from_access;

/// A handle with exclusive ownership of a heap-allocated `Body`.
///
/// Copies are deep, transfers are a pointer move, and a transferred-from
/// handle owns nothing until it is assigned again.
///
/// ```
/// use valsem::handle::OpaqueHandle;
///
/// let mut original: OpaqueHandle<String> = OpaqueHandle::new("body".into());
/// let moved = original.transfer();
/// assert!(original.is_moved_from());
///
/// // Copying a moved-from handle yields a moved-from handle.
/// let copy = original.clone();
/// assert!(copy.is_moved_from());
/// assert_eq!(*moved, "body");
/// ```
pub struct OpaqueHandle<Body> {
    body: Option<Box<Body>>,
}

impl<Body> OpaqueHandle<Body> {
    /// Create a handle owning `body`.
    #[inline]
    pub fn new(body: Body) -> Self {
        Self { body: Some(Box::new(body)) }
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
    /// A moved-from handle copies to a moved-from handle without calling
    /// `copy`.
    pub fn try_clone_with<E>(&self, copy: impl FnOnce(&Body) -> Result<Body, E>) -> Result<Self, E> {
        match &self.body {
            Some(body) => copy(body).map(Self::new),
            None => Ok(Self { body: None }),
        }
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

    /// Take the body out, leaving `self` moved-from.
    #[inline]
    pub fn transfer(&mut self) -> Self {
        Self { body: self.body.take() }
    }

    /// Move-assign from `other`, leaving `other` moved-from.
    ///
    /// The body previously owned by `self` is dropped.
    #[inline]
    pub fn move_assign_from(&mut self, other: &mut Self) {
        self.body = other.body.take();
    }

    /// Whether this handle owns no body.
    #[inline]
    pub fn is_moved_from(&self) -> bool {
        self.body.is_none()
    }

    /// Borrow the body, or `None` if moved-from.
    #[inline]
    pub fn get(&self) -> Option<&Body> {
        self.body.as_deref()
    }

    /// Mutably borrow the body, or `None` if moved-from.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut Body> {
        self.body.as_deref_mut()
    }

    /// Unwrap the body.
    pub fn into_inner(self) -> Option<Body> {
        self.body.map(|body| *body)
    }
}

impl<Body: Default> Default for OpaqueHandle<Body> {
    #[inline]
    fn default() -> Self {
        Self::new(Body::default())
    }
}

impl<Body> From<Body> for OpaqueHandle<Body> {
    #[inline]
    fn from(body: Body) -> Self {
        Self::new(body)
    }
}

impl<Body: Clone> Clone for OpaqueHandle<Body> {
    fn clone(&self) -> Self {
        Self { body: self.body.as_ref().map(|body| Box::new(Body::clone(body))) }
    }

    /// Copy-and-swap: if the copy panics, `self` is untouched.
    fn clone_from(&mut self, source: &Self) {
        let tmp = source.clone();
        *self = tmp;
    }
}

impl<Body> Deref for OpaqueHandle<Body> {
    type Target = Body;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &Body {
        match self.body.as_deref() {
            Some(body) => body,
            None => moved_from_access("OpaqueHandle"),
        }
    }
}

impl<Body> DerefMut for OpaqueHandle<Body> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Body {
        match self.body.as_deref_mut() {
            Some(body) => body,
            None => moved_from_access("OpaqueHandle"),
        }
    }
}

impl<Body: fmt::Debug> fmt::Debug for OpaqueHandle<Body> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(body) => f.debug_tuple("OpaqueHandle").field(body).finish(),
            None => f.write_str("OpaqueHandle(<moved-from>)"),
        }
    }
}

impl<Body: PartialEq> PartialEq for OpaqueHandle<Body> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Body: Eq> Eq for OpaqueHandle<Body> {}

impl<Body: Hash> Hash for OpaqueHandle<Body> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

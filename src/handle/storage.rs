//! Raw inline storage and its two representations.
//!
//! A [`Buffer`] is `SIZE` bytes of uninitialised, 16-byte aligned memory.
//! Over its lifetime it holds exactly one of two layouts:
//!
//! ```text
//! InPlace:  [ Body ............ | unused ]
//! Boxed:    [ Option<Box<Body>> | unused ]   -> heap: Body
//! ```
//!
//! Which one is fixed per `(Body, SIZE)` by [`fits`]. Every typed pointer is
//! derived from the buffer at the point of use and never cached.

use alloc::boxed::Box;
use core::mem::{self, MaybeUninit};
use core::ptr;

/// Alignment of every [`Buffer`], the largest fundamental alignment.
pub(crate) const BUFFER_ALIGN: usize = 16;

/// `SIZE` bytes of raw, suitably aligned storage.
#[repr(C, align(16))]
pub(crate) struct Buffer<const SIZE: usize> {
    bytes: [MaybeUninit<u8>; SIZE],
}

impl<const SIZE: usize> Buffer<SIZE> {
    #[inline]
    pub(crate) const fn uninit() -> Self {
        Self { bytes: [MaybeUninit::uninit(); SIZE] }
    }

    #[inline]
    fn as_ptr<T>(&self) -> *const T {
        self.bytes.as_ptr().cast()
    }

    #[inline]
    fn as_mut_ptr<T>(&mut self) -> *mut T {
        self.bytes.as_mut_ptr().cast()
    }
}

/// Whether a `Body` can live directly inside a `Buffer<SIZE>`.
pub(crate) const fn fits<Body, const SIZE: usize>() -> bool {
    mem::size_of::<Body>() <= SIZE && mem::align_of::<Body>() <= BUFFER_ALIGN
}

/// One way of laying a `Body` out inside a [`Buffer`].
///
/// # Safety
///
/// Every method except [`Representation::emplace`] requires the buffer to
/// currently hold this representation's layout (emplaced and not yet
/// dropped or read out). `emplace` requires the buffer to hold nothing
/// live, and the `(Body, SIZE)` pair to be admissible for this
/// representation.
pub(crate) unsafe trait Representation<Body> {
    /// Write `body` into vacant storage.
    unsafe fn emplace<const SIZE: usize>(buf: &mut Buffer<SIZE>, body: Body);

    /// Write a copy of `src` into vacant `dst`.
    unsafe fn emplace_copy<E, const SIZE: usize>(
        dst: &mut Buffer<SIZE>,
        src: &Buffer<SIZE>,
        copy: impl FnOnce(&Body) -> Result<Body, E>,
    ) -> Result<(), E>;

    /// Move the contents of `src` into vacant `dst`, leaving `src` in its
    /// moved-from state.
    unsafe fn emplace_transfer<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default;

    /// Move-assign `src` into the live `dst`.
    unsafe fn move_assign<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default;

    unsafe fn get<const SIZE: usize>(buf: &Buffer<SIZE>) -> Option<&Body>;

    unsafe fn get_mut<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<&mut Body>;

    /// Read the contents out, leaving the buffer vacant.
    unsafe fn take_out<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<Body>;

    /// Drop the contents, leaving the buffer vacant.
    unsafe fn drop_in_place<const SIZE: usize>(buf: &mut Buffer<SIZE>);
}

/// The body itself lives in the buffer.
pub(crate) enum InPlace {}

/// The buffer holds an owning, nullable box.
pub(crate) enum Boxed {}

unsafe impl<Body> Representation<Body> for InPlace {
    #[inline]
    unsafe fn emplace<const SIZE: usize>(buf: &mut Buffer<SIZE>, body: Body) {
        debug_assert!(fits::<Body, SIZE>());
        unsafe { buf.as_mut_ptr::<Body>().write(body) }
    }

    #[inline]
    unsafe fn emplace_copy<E, const SIZE: usize>(
        dst: &mut Buffer<SIZE>,
        src: &Buffer<SIZE>,
        copy: impl FnOnce(&Body) -> Result<Body, E>,
    ) -> Result<(), E> {
        let body = copy(unsafe { &*src.as_ptr::<Body>() })?;
        unsafe { Self::emplace(dst, body) };
        Ok(())
    }

    #[inline]
    unsafe fn emplace_transfer<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default,
    {
        let body = mem::take(unsafe { &mut *src.as_mut_ptr::<Body>() });
        unsafe { Self::emplace(dst, body) };
    }

    #[inline]
    unsafe fn move_assign<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default,
    {
        let body = mem::take(unsafe { &mut *src.as_mut_ptr::<Body>() });
        unsafe { *dst.as_mut_ptr::<Body>() = body };
    }

    #[inline]
    unsafe fn get<const SIZE: usize>(buf: &Buffer<SIZE>) -> Option<&Body> {
        Some(unsafe { &*buf.as_ptr::<Body>() })
    }

    #[inline]
    unsafe fn get_mut<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<&mut Body> {
        Some(unsafe { &mut *buf.as_mut_ptr::<Body>() })
    }

    #[inline]
    unsafe fn take_out<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<Body> {
        Some(unsafe { buf.as_mut_ptr::<Body>().read() })
    }

    #[inline]
    unsafe fn drop_in_place<const SIZE: usize>(buf: &mut Buffer<SIZE>) {
        unsafe { ptr::drop_in_place(buf.as_mut_ptr::<Body>()) }
    }
}

unsafe impl<Body> Representation<Body> for Boxed {
    #[inline]
    unsafe fn emplace<const SIZE: usize>(buf: &mut Buffer<SIZE>, body: Body) {
        unsafe { Self::put(buf, Some(Box::new(body))) }
    }

    unsafe fn emplace_copy<E, const SIZE: usize>(
        dst: &mut Buffer<SIZE>,
        src: &Buffer<SIZE>,
        copy: impl FnOnce(&Body) -> Result<Body, E>,
    ) -> Result<(), E> {
        // An empty source is a moved-from large body: copy the emptiness.
        let copied = match unsafe { <Self as Representation<Body>>::get(src) } {
            Some(body) => Some(Box::new(copy(body)?)),
            None => None,
        };
        unsafe { Self::put(dst, copied) };
        Ok(())
    }

    #[inline]
    unsafe fn emplace_transfer<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default,
    {
        let taken = unsafe { Self::slot::<Body, SIZE>(src) }.take();
        unsafe { Self::put(dst, taken) };
    }

    #[inline]
    unsafe fn move_assign<const SIZE: usize>(dst: &mut Buffer<SIZE>, src: &mut Buffer<SIZE>)
    where
        Body: Default,
    {
        let taken = unsafe { Self::slot::<Body, SIZE>(src) }.take();
        *unsafe { Self::slot::<Body, SIZE>(dst) } = taken;
    }

    #[inline]
    unsafe fn get<const SIZE: usize>(buf: &Buffer<SIZE>) -> Option<&Body> {
        unsafe { &*buf.as_ptr::<Option<Box<Body>>>() }.as_deref()
    }

    #[inline]
    unsafe fn get_mut<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<&mut Body> {
        unsafe { Self::slot::<Body, SIZE>(buf) }.as_deref_mut()
    }

    #[inline]
    unsafe fn take_out<const SIZE: usize>(buf: &mut Buffer<SIZE>) -> Option<Body> {
        let slot = unsafe { buf.as_mut_ptr::<Option<Box<Body>>>().read() };
        slot.map(|body| *body)
    }

    #[inline]
    unsafe fn drop_in_place<const SIZE: usize>(buf: &mut Buffer<SIZE>) {
        unsafe { ptr::drop_in_place(buf.as_mut_ptr::<Option<Box<Body>>>()) }
    }
}

impl Boxed {
    /// Whether an owning box fits a `Buffer<SIZE>`.
    pub(crate) const fn admits<Body, const SIZE: usize>() -> bool {
        fits::<Option<Box<Body>>, SIZE>()
    }

    #[inline]
    unsafe fn put<Body, const SIZE: usize>(buf: &mut Buffer<SIZE>, slot: Option<Box<Body>>) {
        debug_assert!(Self::admits::<Body, SIZE>());
        unsafe { buf.as_mut_ptr::<Option<Box<Body>>>().write(slot) }
    }

    #[inline]
    unsafe fn slot<Body, const SIZE: usize>(buf: &mut Buffer<SIZE>) -> &mut Option<Box<Body>> {
        unsafe { &mut *buf.as_mut_ptr::<Option<Box<Body>>>() }
    }
}

//! Unsafe, centralized operations on one-value storage.
//!
//! `RawSlot<T>` is a correctly-sized, correctly-aligned region of possibly
//! uninitialized inline storage for exactly one `T`. It is the only place in
//! the crate that touches raw storage, so every primitive that matters for
//! soundness can be audited here:
//! - construction in place (`write`)
//! - borrows of an initialized value (`assume_init_ref` / `assume_init_mut`)
//! - bitwise move-out (`assume_init_read`)
//! - destruction in place (`assume_init_drop`)
//!
//! ## Core invariant
//! A slot has no idea whether it is initialized; it never runs drop glue on
//! its own. The safe stratum pairs each slot with an occupancy flag and calls
//! into here *exactly when* the flag says the call is legal:
//! - `write` only on storage that is vacant or already moved out of,
//! - `assume_init_*` only while the flag is set,
//! - `assume_init_drop` / `assume_init_read` at most once per written value
//!   before the flag is cleared.

use core::mem::MaybeUninit;
use core::ptr;

/// Inline storage for exactly one, possibly absent, `T`.
///
/// `repr(transparent)` over `MaybeUninit<T>`: same size, same alignment, no
/// niche games. Dropping a `RawSlot` drops nothing.
#[repr(transparent)]
pub(crate) struct RawSlot<T> {
    value: MaybeUninit<T>,
}

impl<T> RawSlot<T> {
    /// Creates vacant storage. Costs nothing; no `T` is constructed.
    #[inline(always)]
    pub(crate) const fn uninit() -> Self {
        Self {
            value: MaybeUninit::uninit(),
        }
    }

    /// Creates storage already holding `value`.
    #[inline(always)]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
        }
    }

    /// Constructs `value` in the slot and returns a reference to it.
    ///
    /// Safe to call, but if the slot currently holds an initialized value
    /// that has not been moved out or dropped, that value is overwritten
    /// without its destructor running (a leak, not UB). Callers gate this on
    /// the occupancy flag.
    #[inline(always)]
    pub(crate) fn write(&mut self, value: T) -> &mut T {
        self.value.write(value)
    }

    /// Pointer to the storage. Never checks initialization; dereferencing
    /// requires the slot to be initialized.
    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    /// Mutable pointer to the storage. Same contract as [`as_ptr`](Self::as_ptr).
    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    /// Interprets the slot as `&T`.
    ///
    /// # Safety
    /// The slot must hold an initialized value.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { self.value.assume_init_ref() }
    }

    /// Interprets the slot as `&mut T`.
    ///
    /// # Safety
    /// The slot must hold an initialized value.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { self.value.assume_init_mut() }
    }

    /// Bitwise-moves the value out, leaving the storage logically vacant.
    ///
    /// # Safety
    /// - The slot must hold an initialized value.
    /// - The slot must afterwards be treated as vacant (flag cleared or
    ///   storage re-written); reading or dropping it again double-drops.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_read(&self) -> T {
        // SAFETY: caller asserts initialization and takes over ownership of
        // the returned value; the bytes left behind must not be reused.
        unsafe { ptr::read(self.value.as_ptr()) }
    }

    /// Destroys the value in place, leaving the storage logically vacant.
    ///
    /// # Safety
    /// - The slot must hold an initialized value.
    /// - Must not be called twice for the same written value.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_drop(&mut self) {
        // SAFETY: caller asserts initialization and drop uniqueness.
        unsafe { ptr::drop_in_place(self.value.as_mut_ptr()) }
    }
}

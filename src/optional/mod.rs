//! `OptionalValue` - inline zero-or-one value storage.
//!
//! Holds zero or one `T` directly inside the holder, with no heap allocation
//! and no sentinel state required of `T`. Storage is a [`RawSlot`] paired
//! with an occupancy flag; every transition between empty and occupied runs
//! `T`'s constructor and destructor exactly as often as documented, and the
//! flag is never left claiming a value that is not there.
//!
//! Access comes in three tiers:
//! - unchecked (`get_unchecked`, `get_unchecked_mut`, `take_unchecked`,
//!   `as_ptr`, `as_mut_ptr`): no occupancy check, caller-proved occupancy;
//! - checked (`value`, `value_mut`, `into_value`): `Result` with
//!   [`BadOptionalAccess`] on an empty holder;
//! - observers (`get`, `get_mut`, `into_option`): the plain `Option` view.

mod error;

use core::fmt;
use core::mem::ManuallyDrop;

use crate::raw::RawSlot;

pub use error::BadOptionalAccess;

/// A value that might be absent, stored inline.
///
/// Unlike `Option<T>`, the occupancy flag lives next to raw storage instead
/// of in an enum discriminant, so an occupied holder can be re-assigned in
/// place (`set`, `set_from`, `clone_from`) without the value ever changing
/// address. Unlike `Box<T>`-based designs, an empty holder costs nothing: no
/// allocation, no construction of `T`.
///
/// The holder exclusively owns its value. There is no interior mutability
/// and no synchronization; `Send` and `Sync` are inherited from `T` by the
/// compiler, exactly as for a bare `T` field.
///
/// Moved-from state: every operation that moves the value out either
/// consumes the holder (`into_value`, a plain Rust move) or leaves it empty
/// with the flag cleared (`take`, `take_unchecked`). A holder never reports
/// occupancy over a moved-out value.
///
/// # Example
///
/// ```rust
/// use optslot::OptionalValue;
///
/// let mut slot = OptionalValue::new();
/// assert!(!slot.has_value());
///
/// slot.set(String::from("hello"));
/// assert_eq!(slot.value().unwrap(), "hello");
///
/// let out = slot.take();
/// assert_eq!(out.as_deref(), Some("hello"));
/// assert!(!slot.has_value());
/// ```
pub struct OptionalValue<T> {
    // Layout note: slot first; the flag can ride in its tail padding.
    slot: RawSlot<T>,
    occupied: bool,
}

impl<T> OptionalValue<T> {
    /// Creates an empty holder. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slot: RawSlot::uninit(),
            occupied: false,
        }
    }

    /// Creates a holder already containing `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self {
            slot: RawSlot::new(value),
            occupied: true,
        }
    }

    /// Returns `true` if the holder currently contains a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.occupied
    }

    /// Returns a shared reference to the value, if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if !self.occupied {
            return None;
        }
        // SAFETY: the flag is set, so the slot is initialized.
        Some(unsafe { self.slot.assume_init_ref() })
    }

    /// Returns an exclusive reference to the value, if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if !self.occupied {
            return None;
        }
        // SAFETY: the flag is set, so the slot is initialized.
        Some(unsafe { self.slot.assume_init_mut() })
    }

    /// Returns a shared reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The holder must be occupied. Calling this on an empty holder is
    /// undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied);
        // SAFETY: occupancy is the caller's contract.
        unsafe { self.slot.assume_init_ref() }
    }

    /// Returns an exclusive reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The holder must be occupied. Calling this on an empty holder is
    /// undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied);
        // SAFETY: occupancy is the caller's contract.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Moves the value out without checking occupancy, leaving the holder
    /// empty.
    ///
    /// # Safety
    /// The holder must be occupied. Calling this on an empty holder is
    /// undefined behavior.
    #[inline]
    pub unsafe fn take_unchecked(&mut self) -> T {
        debug_assert!(self.occupied);
        self.occupied = false;
        // SAFETY: occupancy is the caller's contract; the flag is already
        // cleared, so this read is the value's last use.
        unsafe { self.slot.assume_init_read() }
    }

    /// Pointer to the storage. Performs no occupancy check; the pointer is
    /// valid to dereference only while the holder is occupied.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Mutable pointer to the storage. Same contract as [`as_ptr`](Self::as_ptr).
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }

    /// Returns a shared reference to the value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the holder is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.get().ok_or(BadOptionalAccess)
    }

    /// Returns an exclusive reference to the value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the holder is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.get_mut().ok_or(BadOptionalAccess)
    }

    /// Consumes the holder and returns the value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the holder was empty.
    #[inline]
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        // Disable the holder's own drop glue; ownership of the value, if
        // any, transfers to the caller right here.
        let this = ManuallyDrop::new(self);
        if !this.occupied {
            return Err(BadOptionalAccess);
        }
        // SAFETY: the flag is set, so the slot is initialized; `this` is
        // never dropped, so this read is the value's only extraction.
        Ok(unsafe { this.slot.assume_init_read() })
    }

    /// Consumes the holder and returns its content as a plain `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into_value().ok()
    }

    /// Stores `value`, destroying any predecessor, and returns a reference
    /// to the stored value. The storage address is stable: on an occupied
    /// holder the new value lands exactly where the old one lived.
    pub fn set(&mut self, value: T) -> &mut T {
        // `value` is already fully constructed, so the predecessor can be
        // torn down first without risking a half-done replacement.
        self.reset();
        self.slot.write(value);
        self.occupied = true;
        // SAFETY: written just above.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Clones `source` into the holder and returns a reference to the stored
    /// value. On an occupied holder this assigns in place via
    /// `T::clone_from`, which may reuse the existing value's resources
    /// instead of destroying and reconstructing it.
    ///
    /// If `T`'s clone code panics, an empty holder stays empty; an occupied
    /// holder stays occupied by whatever valid state `clone_from` left
    /// behind, per that method's own contract.
    pub fn set_from(&mut self, source: &T) -> &mut T
    where
        T: Clone,
    {
        if self.occupied {
            // SAFETY: the flag is set, so the slot is initialized.
            let target = unsafe { self.slot.assume_init_mut() };
            target.clone_from(source);
            return target;
        }
        let value = source.clone();
        self.slot.write(value);
        self.occupied = true;
        // SAFETY: written just above.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Constructs a value from `init` and stores it, destroying any
    /// predecessor, then returns a reference to the stored value.
    ///
    /// The replacement is fully constructed *before* the predecessor is
    /// destroyed: if `init` panics, the holder, predecessor included, is
    /// left exactly as it was.
    pub fn emplace<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = init();
        self.set(value)
    }

    /// Destroys the contained value, if any, leaving the holder empty.
    /// Idempotent: calling it on an empty holder does nothing.
    pub fn reset(&mut self) {
        if self.occupied {
            // Clear the flag before running `T::drop` so a panicking
            // destructor cannot lead to a second drop during unwinding.
            self.occupied = false;
            // SAFETY: the flag was set, so the slot is initialized; this is
            // the value's only drop.
            unsafe { self.slot.assume_init_drop() };
        }
    }

    /// Moves the value out, if any, leaving the holder empty and reusable.
    pub fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        // SAFETY: the flag is set, so the slot is initialized; the flag is
        // cleared right after, so this read is the value's last use.
        let value = unsafe { self.slot.assume_init_read() };
        self.occupied = false;
        Some(value)
    }

    /// Stores `value` and returns the predecessor, if any, instead of
    /// destroying it.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let predecessor = self.take();
        self.slot.write(value);
        self.occupied = true;
        predecessor
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OptionalValue<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for OptionalValue<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::with_value(value.clone()),
            None => Self::new(),
        }
    }

    /// Assigns `source`'s state to `self` without discarding usable storage.
    /// With both sides occupied this runs `T::clone_from` in place; an empty
    /// `source` resets `self`; an empty `self` clones into its vacant slot;
    /// with both sides empty nothing happens. An empty `source`'s storage is
    /// never read.
    fn clone_from(&mut self, source: &Self) {
        match source.get() {
            Some(value) => {
                self.set_from(value);
            }
            None => self.reset(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("OptionalValue").field(value).finish(),
            None => f.write_str("OptionalValue(empty)"),
        }
    }
}

impl<T> From<T> for OptionalValue<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::new(),
        }
    }
}

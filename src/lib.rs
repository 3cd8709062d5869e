//! # `optslot` - Inline Optional Value Storage
//!
//! A single building block: [`OptionalValue<T>`] holds zero or one value of
//! type `T` directly inside itself - no heap allocation, no boxing, and no
//! sentinel state required of `T`. It is the primitive for "a value that
//! might be absent" in layouts where the occupancy flag must live next to
//! raw storage rather than in an enum discriminant.
//!
//! ## Safety Guarantees
//!
//! - **Audited unsafe foundation**: every raw-storage operation
//!   (construct-in-place, borrow, move-out, destroy-in-place) lives in one
//!   crate-internal module with an explicit contract, and every caller
//!   discharges that contract with the occupancy flag.
//! - **Balanced lifetimes**: each contained value is constructed once and
//!   destroyed at most once, across every combination of assignment,
//!   replacement, extraction, and unwinding. The flag never claims a value
//!   that is not there.
//! - **Honest moved-from state**: extraction either consumes the holder or
//!   leaves it empty. There is no "occupied but hollow" state to trip over.
//!
//! ## Key Features
//!
//! - **Zero-cost empty state**: an empty holder constructs nothing.
//! - **Address-stable re-assignment**: `set`, `set_from` and `clone_from`
//!   reuse the occupied slot in place; the value never moves.
//! - **Three access tiers**: unchecked (`unsafe`, zero overhead), checked
//!   (`Result` with [`BadOptionalAccess`]), and plain `Option<&T>`
//!   observers, so callers pay exactly the checking they ask for.
//! - **Panic safety**: a panicking constructor leaves the holder - previous
//!   value included - untouched; a panicking destructor cannot cause a
//!   second drop.
//!
//! ## Example
//!
//! ```rust
//! use optslot::OptionalValue;
//!
//! let mut slot: OptionalValue<String> = OptionalValue::new();
//! assert!(!slot.has_value());
//!
//! slot.emplace(|| "higgs".repeat(2));
//! assert_eq!(slot.value().unwrap(), "higgshiggs");
//!
//! slot.set(String::from("boson"));
//! assert_eq!(slot.take().as_deref(), Some("boson"));
//! assert!(slot.value().is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod optional;
mod raw;

pub use optional::{BadOptionalAccess, OptionalValue};

// Compile-time layout assertions: the holder is exactly one `T`'s worth of
// correctly-aligned storage plus the flag.
const _: () = {
    use core::mem;

    // The storage never changes `T`'s alignment.
    assert!(mem::align_of::<OptionalValue<u8>>() == mem::align_of::<u8>());
    assert!(mem::align_of::<OptionalValue<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<OptionalValue<[u64; 4]>>() == mem::align_of::<[u64; 4]>());

    // Size bounds: exact where layout is forced, upper bounds for the rest.
    assert!(mem::size_of::<OptionalValue<()>>() == 1);
    assert!(mem::size_of::<OptionalValue<u8>>() == 2);
    assert!(
        mem::size_of::<OptionalValue<u64>>() <= mem::size_of::<u64>() + mem::align_of::<u64>()
    );
    assert!(
        mem::size_of::<OptionalValue<[u64; 4]>>()
            <= mem::size_of::<[u64; 4]>() + mem::align_of::<[u64; 4]>()
    );
};

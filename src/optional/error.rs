//! Error type for the checked access path.

/// Error returned by the checked accessors of
/// [`OptionalValue`](crate::OptionalValue) when the holder is empty.
///
/// Only [`value`](crate::OptionalValue::value),
/// [`value_mut`](crate::OptionalValue::value_mut) and
/// [`into_value`](crate::OptionalValue::into_value) produce this error; the
/// unchecked accessors never check and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadOptionalAccess;

impl core::fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for BadOptionalAccess {}

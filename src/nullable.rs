//! Null-collapse.
//!
//! A [`Nullable`] is any source whose value may be missing at the
//! "reference level". Converting one into an [`Optional`] maps a missing
//! value to `Absent`, so a `Present` never wraps a missing value.
//!
//! A bare value has no conversion into an optional; it is wrapped with
//! [`Optional::some`]. The only `From` conversion is the collapsing one, so
//! the target type of an `.into()` cannot turn a missing value into a
//! present one:
//!
//! ```compile_fail
//! use optionals::Optional;
//!
//! let values = vec![1];
//! let nested: Optional<Option<&i32>> = values.get(9).into();
//! ```

use crate::optional::Optional;

/// A source that may or may not hold a value.
pub trait Nullable {
    type Value;

    /// The held value, or `None` when the source is missing.
    fn into_value(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_value(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    fn into_value(self) -> Option<T> {
        self.into_option()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of(value)
    }
}

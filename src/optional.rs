//! # Optional Module
//!
//! The [`Optional`] value type: either `Present` with exactly one value, or
//! `Absent` with none.
//!
//! Values are extracted through case analysis. Either match on the two
//! variants directly (no wildcard arm, so the compiler insists on both) or
//! call [`Optional::match_with`], which takes both branches. Defaults are
//! substituted with [`Optional::get_or_else`] and its lazy sibling
//! [`Optional::get_or_else_with`]. Computations are sequenced with
//! [`Optional::map`] and [`Optional::bind`], both of which skip their
//! callback entirely on the absent path.
//!
//! ```
//! use optionals::Optional;
//!
//! let total = Optional::some(2)
//!     .bind(|a| Optional::some(4).map(|b| a + b))
//!     .bind(|ab| Optional::some(6).map(|c| ab + c));
//! assert_eq!(total, Optional::some(12));
//! assert_eq!(total.to_string(), "some(12)");
//! ```
//!
//! The only way to get a value out without handling absence is the
//! unchecked escape hatch, [`Optional::force_unwrap`], which panics with an
//! [`AbsentValueError`].

use std::fmt;

use crate::error::AbsentValueError;
use crate::nullable::Nullable;

/// A value that is either present or absent.
///
/// `Absent` is declared first so that the derived ordering places it before
/// every `Present` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

pub use self::Optional::{Absent, Present};

/// Wraps a value as present.
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// The absent value for any `T`.
pub const fn none<T>() -> Optional<T> {
    Optional::Absent
}

impl<T> Optional<T> {
    /// Wraps `value` as present. A Rust value is never null, so this never
    /// degrades to absent.
    ///
    /// `value` is taken as is: `Optional::some(None::<u8>)` is a present
    /// `Optional<Option<u8>>`, not an absent value. Sources that may be
    /// missing (lookups, `Option`s) go through [`Optional::of`] or
    /// `Optional::from`, which collapse a missing value to `Absent`.
    pub const fn some(value: T) -> Self {
        Optional::Present(value)
    }

    pub const fn none() -> Self {
        Optional::Absent
    }

    /// Builds an optional from a source that may itself be missing.
    ///
    /// A missing source collapses to `Absent`; there is no way to obtain a
    /// `Present` holding a missing value.
    ///
    /// ```
    /// use optionals::Optional;
    ///
    /// let name: Option<&str> = None;
    /// assert!(Optional::of(name).is_absent());
    /// assert_eq!(Optional::of(Some("ada")), Optional::some("ada"));
    /// ```
    pub fn of<N>(source: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match source.into_value() {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    /// Keeps the value of `Ok`, turning any error into `Absent`.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Optional::Present(value),
            Err(_) => Optional::Absent,
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Case analysis: runs `on_present` with the held value or `on_absent`,
    /// never both, and returns what the chosen branch returns.
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    /// Case analysis for side effects only.
    pub fn match_effect<P, A>(self, on_present: P, on_absent: A)
    where
        P: FnOnce(T),
        A: FnOnce(),
    {
        self.match_with(on_present, on_absent)
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback,
        }
    }

    /// Like [`Optional::get_or_else`], but `fallback` is only called on the
    /// absent path.
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => fallback(),
        }
    }

    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else_with(T::default)
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Sequences into another optional-producing step. The result of `f` is
    /// returned as is, and `f` is never called when `self` is absent.
    pub fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Alias of [`Optional::bind`].
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.bind(f)
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Optional::Present(value) = self {
            if predicate(&value) {
                return Optional::Present(value);
            }
        }
        Optional::Absent
    }

    /// Calls `f` with a reference to the held value, then passes `self` on.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(value) = &self {
            f(value);
        }
        self
    }

    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(_) => other,
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn or(self, other: Self) -> Self {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => other,
        }
    }

    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => f(),
        }
    }

    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Optional::Present(value), Optional::Absent) => Optional::Present(value),
            (Optional::Absent, Optional::Present(value)) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    /// Pairs two independent optionals; absent if either is.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Optional::Present(a), Optional::Present(b)) => Optional::Present((a, b)),
            _ => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(err),
        }
    }

    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(err()),
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Checked extraction: the held value, or [`AbsentValueError`].
    pub fn try_unwrap(self) -> Result<T, AbsentValueError> {
        self.ok_or_else(AbsentValueError::force_unwrap::<T>)
    }

    /// Unchecked extraction.
    ///
    /// This opts out of the guarantee that absence is always handled.
    /// Prefer [`Optional::match_with`] or [`Optional::get_or_else`].
    ///
    /// # Panics
    ///
    /// Panics with [`AbsentValueError::ForceUnwrap`] if the value is absent.
    #[track_caller]
    pub fn force_unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(type_name = err.type_name(), "force_unwrap on an absent optional");
                panic!("{}", err)
            }
        }
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "some({})", value),
            Optional::Absent => write!(f, "none"),
        }
    }
}

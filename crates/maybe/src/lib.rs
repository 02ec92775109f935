//! `Maybe<T>`: a value that is either present (`Just`) or absent (`Nothing`).
//!
//! Everything is derived from one case-analysis primitive, [`Maybe::switch`].
//! The monadic surface ([`ret`], [`Maybe::bind`], [`Maybe::select_many`]) lives
//! in [`monad`] and never looks at the state directly.
//!
//! A present payload may itself be "empty": `Maybe<Option<u8>>` keeps
//! `Just(None)` and `Nothing` apart.

pub mod monad;

pub use contract::{ContractError, Result};
pub use monad::ret;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<T> Maybe<T> {
    /// The absent value. Stateless, so one constant serves every consumer.
    pub const NOTHING: Self = Maybe::Nothing;

    #[inline]
    pub const fn just(value: T) -> Self { Maybe::Just(value) }

    #[inline]
    pub const fn nothing() -> Self { Maybe::Nothing }

    /// Case analysis: `on_value` for a present value, `on_nothing` otherwise.
    /// Exactly one of the two runs.
    #[inline]
    pub fn switch<R>(self, on_value: impl FnOnce(T) -> R, on_nothing: impl FnOnce() -> R) -> R {
        match self {
            Maybe::Just(value) => on_value(value),
            Maybe::Nothing => on_nothing(),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    pub fn is_just(&self) -> bool { self.as_ref().switch(|_| true, || false) }

    pub fn is_nothing(&self) -> bool { !self.is_just() }

    /// The present value, or `default`.
    pub fn value_or(self, default: T) -> T { self.switch(|value| value, || default) }

    pub fn value_or_else(self, default: impl FnOnce() -> T) -> T { self.switch(|value| value, default) }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self { Maybe::Nothing }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self { value.switch(Some, || None) }
}

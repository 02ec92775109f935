//! Monadic combinators, all expressed through [`Maybe::switch`].
//!
//! `ret` and `bind` satisfy the monad laws:
//!
//! - left identity: `ret(x).bind(f) == f(x)`
//! - right identity: `m.bind(ret) == m`
//! - associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`

use contract::{ensures, Result};

use crate::Maybe;

/// Wraps a value as present. Never rejects an "empty" payload.
#[inline]
pub fn ret<T>(value: T) -> Maybe<T> {
    Maybe::just(value)
}

impl<T> Maybe<T> {
    /// Feeds a present value to `f` and returns its result as is. On `Nothing`
    /// the result is `Nothing` and `f` is never called.
    #[inline]
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.switch(f, Maybe::nothing)
    }

    /// [`Maybe::bind`] for functions that may fail to produce a `Maybe` at
    /// all. Absence has to be reported as `Nothing`; a `None` from `f` is a
    /// misuse and fails with [`contract::ContractError::InvalidOperation`].
    pub fn try_bind<U>(self, f: impl FnOnce(T) -> Option<Maybe<U>>) -> Result<Maybe<U>> {
        self.switch(
            |value| ensures(f(value), "bind", "function returned no Maybe"),
            || Ok(Maybe::Nothing),
        )
    }

    /// Comprehension sugar:
    /// `bind(|a| transform(&a).bind(|b| ret(collate(a, b))))`.
    pub fn select_many<U, V>(
        self,
        transform: impl FnOnce(&T) -> Maybe<U>,
        collate: impl FnOnce(T, U) -> V,
    ) -> Maybe<V> {
        self.bind(|a| transform(&a).bind(|b| ret(collate(a, b))))
    }

    /// [`Maybe::select_many`] with the postcondition of [`Maybe::try_bind`]
    /// on `transform`.
    pub fn try_select_many<U, V>(
        self,
        transform: impl FnOnce(&T) -> Option<Maybe<U>>,
        collate: impl FnOnce(T, U) -> V,
    ) -> Result<Maybe<V>> {
        self.switch(
            |a| {
                let next = ensures(transform(&a), "select_many", "transform returned no Maybe")?;
                Ok(next.bind(|b| ret(collate(a, b))))
            },
            || Ok(Maybe::Nothing),
        )
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        self.bind(|value| ret(f(value)))
    }

    /// Keeps a present value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
        self.bind(|value| if predicate(&value) { ret(value) } else { Maybe::Nothing })
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

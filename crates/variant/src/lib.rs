//! Closed sum types with 2 to 16 alternatives.
//!
//! Every arity gets an enum (`Variant2` .. `Variant16`) whose alternatives are
//! named by position (`First`, `Second`, ...). Values are consumed through
//! case analysis only:
//!
//! - [`Variant2::match_with`] and friends take one handler per alternative, so
//!   exhaustiveness is checked by the compiler.
//! - [`Variant::cases`] returns a builder where handlers are optional. It is
//!   finished with [`CaseAnalysis::otherwise`] (partial match with a fallback)
//!   or [`CaseAnalysis::exhaustive`] (every handler must have been supplied).
//!
//! Alternatives may additionally be bounded by a common supertype, see
//! [`WithCommon`].
//!
//! ```
//! use variant::prelude::*;
//! use variant::Variant3;
//!
//! let v: Variant3<u8, &str, f64> = Variant3::Second("x");
//! let len = v.cases().second(|s| s.len() as i32).otherwise(|| -1);
//! assert_eq!(len, 1);
//! ```

mod arity;
mod common;

pub use arity::*;
pub use common::{Common, WithCommon, Widen};
pub use contract::{ContractError, Result};

/// Behaviour shared by every arity.
pub trait Variant: Sized {
    /// Number of alternatives.
    const ARITY: usize;

    /// Builder collecting optional per-alternative handlers.
    type Cases<'a, R>: CaseAnalysis<R>;

    /// Starts a case analysis with no handlers registered.
    fn cases<'a, R>(self) -> Self::Cases<'a, R>;
}

/// Terminal operations of a case builder.
pub trait CaseAnalysis<R>: Sized {
    /// Runs the handler registered for the active alternative, or `otherwise`
    /// when there is none.
    fn otherwise(self, otherwise: impl FnOnce() -> R) -> R;

    /// Like [`CaseAnalysis::otherwise`], but rejects an absent fallback before
    /// anything is dispatched.
    fn try_otherwise(self, otherwise: Option<impl FnOnce() -> R>) -> Result<R> {
        let otherwise = contract::requires(otherwise, "otherwise")?;
        Ok(self.otherwise(otherwise))
    }

    /// Dispatches only if a handler was registered for every alternative.
    /// Otherwise fails with [`ContractError::InvalidArgument`] naming the
    /// first missing handler, and no handler runs.
    fn exhaustive(self) -> Result<R>;
}

pub mod prelude {
    pub use crate::{CaseAnalysis, Common, Variant, Widen};
}

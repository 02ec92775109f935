//! Contract checks for handler-driven APIs.
//!
//! Both kinds of failure reported here are programmer errors: a required
//! argument was absent, or a supplied function broke its postcondition. They
//! are raised before any dispatch happens and are never recovered internally.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A required handler, delegate or constructor value was absent.
    #[error("argument `{parameter}` must not be absent")]
    InvalidArgument { parameter: &'static str },
    /// A supplied function returned an absent value where a concrete one was required.
    #[error("invalid operation in `{operation}`: {reason}")]
    InvalidOperation { operation: &'static str, reason: &'static str },
}

pub type Result<T, E = ContractError> = core::result::Result<T, E>;

impl ContractError {
    /// Name of the offending argument, if this is an argument error.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ContractError::InvalidArgument { parameter } => Some(parameter),
            ContractError::InvalidOperation { .. } => None,
        }
    }
}

/// Precondition: `value` must be present.
#[inline]
pub fn requires<T>(value: Option<T>, parameter: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "contract", parameter, "precondition violated");
            Err(ContractError::InvalidArgument { parameter })
        }
    }
}

/// Postcondition: a value produced by caller-supplied code must be present.
#[inline]
pub fn ensures<T>(value: Option<T>, operation: &'static str, reason: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "contract", operation, reason, "postcondition violated");
            Err(ContractError::InvalidOperation { operation, reason })
        }
    }
}

/// Checks every listed `Option` binding in order and rebinds it to its
/// contents, returning the first [`ContractError::InvalidArgument`] from the
/// enclosing function. Nothing after the macro runs unless all are present.
///
/// ```
/// use contract::{requires_all, Result};
///
/// fn add(lhs: Option<i32>, rhs: Option<i32>) -> Result<i32> {
///     requires_all!(lhs, rhs);
///     Ok(lhs + rhs)
/// }
///
/// assert_eq!(add(Some(1), Some(2)), Ok(3));
/// assert_eq!(add(Some(1), None).unwrap_err().parameter(), Some("rhs"));
/// ```
#[macro_export]
macro_rules! requires_all {
    ($($arg:ident),+ $(,)?) => {
        $( let $arg = $crate::requires($arg, ::core::stringify!($arg))?; )+
    };
}

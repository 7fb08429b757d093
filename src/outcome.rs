//! The two-branch outcome type and guarded payload access.
//!
//! [`Outcome`] stores exactly one of a tagged success or a tagged failure.
//! It is built once, from a [`Succeeded`] or [`Failed`] marker (or the named
//! constructors), and is read-only afterwards. Payloads are reached by
//! pattern matching, by [`Outcome::resolve`], or by accessors that refuse to
//! hand back the inactive branch.

use crate::marker::{Failed, NoValue, Succeeded};
use thiserror::Error;

/// Error returned by the checked accessors when the requested payload
/// belongs to the branch that is not active.
///
/// Wrong-branch access is a caller bug, not a domain failure; this type
/// exists so harness and assertion code can observe the misuse as a value
/// instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InactivePayload {
    /// A success payload was requested from a failed outcome.
    #[error("success payload requested from a failed outcome")]
    NotSuccess,
    /// A failure payload was requested from a successful outcome.
    #[error("failure payload requested from a successful outcome")]
    NotFailure,
}

/// Either the tagged success or the tagged failure of one operation.
///
/// The two payload slots are independent: instantiate either (or both) with
/// [`NoValue`] to declare that the branch carries nothing. The bare
/// `Outcome` path names the doubly-empty form via default type parameters.
///
/// An outcome is created exactly once — from a marker conversion or a named
/// constructor — and never mutated. There is no default state: a value of
/// this type always has exactly one meaningful branch.
///
/// # Example
///
/// ```
/// use outcome::{Failed, Outcome, Succeeded};
///
/// fn lookup(id: u32) -> Outcome<&'static str, String> {
///     match id {
///         0 => Succeeded("genesis").into(),
///         _ => Failed(format!("unknown id {id}")).into(),
///     }
/// }
///
/// match lookup(0) {
///     Outcome::Success(name) => assert_eq!(name, "genesis"),
///     Outcome::Failure(reason) => panic!("unexpected failure: {reason}"),
/// }
/// ```
#[must_use = "an outcome reports failure through its discriminant, which must be inspected"]
#[derive(Debug, Clone, Copy)]
pub enum Outcome<T = NoValue, E = NoValue> {
    /// The operation succeeded; carries the success payload.
    Success(T),
    /// The operation failed; carries the error payload.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome carrying `value`.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome carrying `error`.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` when the success branch is active.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the failure branch is active.
    #[must_use]
    pub const fn failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics when the failure branch is active. Reading the inactive
    /// payload is a programming error at the call site; callers that have
    /// not already branched on the discriminant should use
    /// [`try_success_value`](Self::try_success_value) or pattern matching.
    #[must_use]
    pub const fn success_value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("success payload requested from a failed outcome"),
        }
    }

    /// Borrows the failure payload.
    ///
    /// # Panics
    ///
    /// Panics when the success branch is active.
    #[must_use]
    pub const fn failure_value(&self) -> &E {
        match self {
            Self::Success(_) => panic!("failure payload requested from a successful outcome"),
            Self::Failure(error) => error,
        }
    }

    /// Borrows the success payload, reporting wrong-branch access as a value.
    ///
    /// # Errors
    ///
    /// Returns [`InactivePayload::NotSuccess`] when the failure branch is
    /// active.
    pub const fn try_success_value(&self) -> Result<&T, InactivePayload> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InactivePayload::NotSuccess),
        }
    }

    /// Borrows the failure payload, reporting wrong-branch access as a value.
    ///
    /// # Errors
    ///
    /// Returns [`InactivePayload::NotFailure`] when the success branch is
    /// active.
    pub const fn try_failure_value(&self) -> Result<&E, InactivePayload> {
        match self {
            Self::Success(_) => Err(InactivePayload::NotFailure),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Moves the success payload out of the outcome.
    ///
    /// # Panics
    ///
    /// Panics when the failure branch is active.
    #[must_use]
    pub fn into_success_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("success payload requested from a failed outcome"),
        }
    }

    /// Moves the failure payload out of the outcome.
    ///
    /// # Panics
    ///
    /// Panics when the success branch is active.
    #[must_use]
    pub fn into_failure_value(self) -> E {
        match self {
            Self::Success(_) => panic!("failure payload requested from a successful outcome"),
            Self::Failure(error) => error,
        }
    }

    /// Consumes the outcome, handling both branches.
    ///
    /// The caller must supply a handler for each branch, so wrong-branch
    /// access cannot be written. This is extraction, not chaining: it
    /// produces a plain value, never another outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::{Failed, Outcome};
    ///
    /// let outcome: Outcome<u32, String> = Failed("timeout".to_owned()).into();
    /// let summary = outcome.resolve(
    ///     |value| format!("got {value}"),
    ///     |error| format!("failed: {error}"),
    /// );
    /// assert_eq!(summary, "failed: timeout");
    /// ```
    pub fn resolve<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E> From<Succeeded<T>> for Outcome<T, E> {
    /// Activates the success branch, moving the marker's payload in.
    fn from(marker: Succeeded<T>) -> Self {
        Self::Success(marker.0)
    }
}

impl<T, E> From<Failed<E>> for Outcome<T, E> {
    /// Activates the failure branch, moving the marker's payload in.
    fn from(marker: Failed<E>) -> Self {
        Self::Failure(marker.0)
    }
}

//! The outcome type: either a produced value or the error that prevented it.
//!
//! One generic enum covers both payload families. Nullable payloads are
//! written `Maybe<Option<T>>`; inline payloads use the [`ValueMaybe`] alias,
//! which is the same type under a name that documents intent.

mod convert;

use crate::{
    error::{AsError, Error, Fault, FaultError},
    outcome::{Outcome, raise},
};

/// Either a produced value or the error that prevented it.
///
/// Exactly one side is present. An outcome is built once and never changes;
/// match on it to narrow, use the [`Project`](crate::Project) operations, or
/// call [`Maybe::value`] / [`Maybe::into_value`] to get the value or the
/// error's [`Fault`].
///
/// # Examples
///
/// ```
/// use maybe_error::{Error, Maybe};
///
/// fn parse_port(raw: &str) -> Maybe<u16> {
///     raw.parse()
///         .map_or_else(|_| Maybe::err(Error::new("not a port")), Maybe::ok)
/// }
///
/// assert_eq!(parse_port("8080").value().ok(), Some(&8080));
/// assert!(parse_port("http").has_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an outcome may carry an error that should be handled"]
pub enum Maybe<T, E = Error> {
    /// A produced value.
    Value(T),
    /// The error that prevented a value.
    Error(E),
}

/// An outcome over an inline payload.
///
/// Identical to [`Maybe`]; the alias marks call sites where "no value" is
/// not a meaningful state apart from the error.
pub type ValueMaybe<T, E = Error> = Maybe<T, E>;

/// An outcome whose error keeps a typed native fault `F`.
pub type MaybeEx<T, F> = Maybe<T, FaultError<F>>;

/// An inline-payload outcome whose error keeps a typed native fault `F`.
pub type ValueMaybeEx<T, F> = Maybe<T, FaultError<F>>;

impl<T, E> Maybe<T, E> {
    /// A success outcome.
    pub const fn ok(value: T) -> Self {
        Self::Value(value)
    }

    /// An error outcome.
    pub const fn err(error: E) -> Self {
        Self::Error(error)
    }

    /// Returns `true` when the outcome carries an error.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` when the outcome carries a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        !self.has_error()
    }

    /// The carried error; `None` for success outcomes.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Value(_) => None,
        }
    }

    /// Borrows both sides.
    pub const fn as_ref(&self) -> Maybe<&T, &E> {
        match self {
            Self::Value(value) => Maybe::Value(value),
            Self::Error(error) => Maybe::Error(error),
        }
    }

    /// Consumes the outcome, keeping only the error.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Value(_) => None,
        }
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the carried error for error outcomes.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    /// Transforms the value, leaving an error untouched.
    pub fn map<U, P>(self, project: P) -> Maybe<U, E>
    where
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Maybe::Value(project(value)),
            Self::Error(error) => Maybe::Error(error),
        }
    }

    /// Transforms the error, leaving a value untouched.
    pub fn map_err<G, P>(self, project: P) -> Maybe<T, G>
    where
        P: FnOnce(E) -> G,
    {
        match self {
            Self::Value(value) => Maybe::Value(value),
            Self::Error(error) => Maybe::Error(project(error)),
        }
    }

    /// Chains a step that may itself fail.
    pub fn and_then<U, P>(self, next: P) -> Maybe<U, E>
    where
        P: FnOnce(T) -> Maybe<U, E>,
    {
        match self {
            Self::Value(value) => next(value),
            Self::Error(error) => Maybe::Error(error),
        }
    }

    /// Calls `inspect` with the error, if any, and returns the outcome.
    pub fn inspect_err<P>(self, inspect: P) -> Self
    where
        P: FnOnce(&E),
    {
        if let Self::Error(error) = &self {
            inspect(error);
        }
        self
    }

    /// Widens the error to the base [`Error`].
    ///
    /// The discriminant and payload are kept; a wrapped fault stays the same
    /// allocation.
    pub fn widen(self) -> Maybe<T>
    where
        E: Into<Error>,
    {
        self.map_err(Into::into)
    }
}

impl<T, E: AsError> Maybe<T, E> {
    /// Borrows the value.
    ///
    /// # Errors
    ///
    /// Returns the carried error's [`Fault`] for error outcomes: wrapped
    /// faults come back as the original allocation.
    pub fn value(&self) -> Result<&T, Fault> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(raise(error)),
        }
    }

    /// Unwraps the value.
    ///
    /// # Errors
    ///
    /// Returns the carried error's [`Fault`] for error outcomes.
    pub fn into_value(self) -> Result<T, Fault> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(raise(&error)),
        }
    }
}

impl<T> Maybe<T> {
    /// An error outcome wrapping a native fault in a generic [`Error`].
    pub fn from_fault<F>(fault: F) -> Self
    where
        F: std::error::Error + Send + Sync + 'static,
    {
        Self::Error(Error::from_fault(fault))
    }

    /// An error outcome wrapping an already shared fault.
    pub fn from_shared_fault(fault: Fault) -> Self {
        Self::Error(Error::from_shared_fault(fault))
    }
}

impl<T, F> Maybe<T, FaultError<F>>
where
    F: std::error::Error + Send + Sync + 'static,
{
    /// An error outcome built straight from a typed native fault.
    pub fn fault(fault: F) -> Self {
        Self::Error(FaultError::new(fault))
    }
}

/// A success outcome holding `T::default()`.
///
/// There is no empty state: for a nullable payload this is `Value(None)`.
impl<T: Default, E> Default for Maybe<T, E> {
    fn default() -> Self {
        Self::Value(T::default())
    }
}

impl<T, E: AsError> Outcome for Maybe<T, E> {
    type Value = T;
    type Error = E;

    fn has_error(&self) -> bool {
        Self::has_error(self)
    }

    fn error(&self) -> Option<&E> {
        Self::error(self)
    }

    fn into_parts(self) -> Result<T, E> {
        self.into_result()
    }
}

//! Conversions between outcomes, standard results and bare errors.
//!
//! `From<T>` is deliberately absent: it would overlap with `From<E>` for
//! any `T == E`. Success outcomes are built with [`Maybe::ok`] and error
//! outcomes from a [`Result`] or one of the error types below.

use super::Maybe;
use crate::error::{Error, FaultError};

impl<T, E> From<Result<T, E>> for Maybe<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Maybe<T, E>> for Result<T, E> {
    fn from(outcome: Maybe<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Lets producers write `return Error::new("..").into();`.
impl<T> From<Error> for Maybe<T> {
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl<T, F> From<FaultError<F>> for Maybe<T, FaultError<F>> {
    fn from(error: FaultError<F>) -> Self {
        Self::Error(error)
    }
}

/// Widens a typed-fault outcome into the generic form.
impl<T, F> From<Maybe<T, FaultError<F>>> for Maybe<T> {
    fn from(outcome: Maybe<T, FaultError<F>>) -> Self {
        outcome.widen()
    }
}

//! The minimal capability set shared by every outcome form.

use crate::error::{AsError, Fault};

/// A resolved value-or-error.
///
/// Implemented by [`Maybe`](crate::Maybe) and by `Result<T, E>` whenever `E`
/// is one of this crate's error types, so the projection operations in
/// [`Project`](crate::Project) apply to both.
pub trait Outcome: Sized {
    /// Success payload.
    type Value;
    /// Error payload.
    type Error: AsError;

    /// Returns `true` when the outcome carries an error.
    fn has_error(&self) -> bool;

    /// The carried error, if any.
    fn error(&self) -> Option<&Self::Error>;

    /// Splits the outcome into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the carried error for error outcomes.
    fn into_parts(self) -> Result<Self::Value, Self::Error>;

    /// Returns `true` when the outcome carries a value.
    fn has_value(&self) -> bool {
        !self.has_error()
    }
}

impl<T, E: AsError> Outcome for Result<T, E> {
    type Value = T;
    type Error = E;

    fn has_error(&self) -> bool {
        self.is_err()
    }

    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }

    fn into_parts(self) -> Result<T, E> {
        self
    }
}

/// Turns a carried error into the fault handed to the caller.
///
/// Every value access on an error outcome passes through here.
pub(crate) fn raise<E: AsError + ?Sized>(error: &E) -> Fault {
    let base = error.as_error();
    tracing::debug!(
        error = base.message(),
        wrapped = base.wrapped_fault().is_some(),
        "value requested from an error outcome"
    );
    error.to_fault()
}

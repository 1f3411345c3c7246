//! The capability shared by every error type an outcome can carry.

use super::{FaultError, fault::Fault, types::Error};

/// Error payloads usable inside an outcome.
///
/// Every implementor exposes a base [`Error`] view. The provided
/// [`AsError::to_fault`] defers to [`Error::to_fault`], which already
/// preserves wrapped fault identity, so implementors rarely override it.
pub trait AsError {
    /// The base error view.
    fn as_error(&self) -> &Error;

    /// Materialises the fault raised when an error outcome is unwrapped.
    fn to_fault(&self) -> Fault {
        self.as_error().to_fault()
    }
}

impl AsError for Error {
    fn as_error(&self) -> &Error {
        self
    }
}

impl<F> AsError for FaultError<F> {
    fn as_error(&self) -> &Error {
        FaultError::as_error(self)
    }
}

impl<E: AsError + ?Sized> AsError for &E {
    fn as_error(&self) -> &Error {
        (**self).as_error()
    }

    fn to_fault(&self) -> Fault {
        (**self).to_fault()
    }
}

impl<E: AsError + ?Sized> AsError for Box<E> {
    fn as_error(&self) -> &Error {
        (**self).as_error()
    }

    fn to_fault(&self) -> Fault {
        (**self).to_fault()
    }
}

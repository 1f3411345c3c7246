//! Native faults and the typed error that wraps them.

use std::{error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

use super::types::Error;

/// A shared native fault.
///
/// This is what an error outcome yields when its value is demanded. Sharing
/// through [`Arc`] lets a wrapped fault come back out as the very allocation
/// that went in.
pub type Fault = Arc<dyn StdError + Send + Sync + 'static>;

/// An error wrapping a native fault whose type is not tracked statically.
///
/// Built with [`Error::from_fault`]; the untyped counterpart of
/// [`FaultError`], raising the wrapped fault itself.
pub type AnyFaultError = Error;

/// Fault synthesised from a plain [`Error`] by [`Error::to_fault`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorFault {
    message: String,
}

impl ErrorFault {
    pub(crate) const fn new(message: String) -> Self {
        Self { message }
    }

    /// Rendered text of the originating error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lists the `source()` chain of `fault`, one `caused by:` line per cause.
pub(crate) fn source_chain(fault: &(dyn StdError + 'static)) -> Option<String> {
    let mut causes = Vec::new();
    let mut next = fault.source();
    while let Some(cause) = next {
        causes.push(format!("caused by: {cause}"));
        next = cause.source();
    }
    (!causes.is_empty()).then(|| causes.join("\n"))
}

/// An [`Error`] that keeps a strongly typed native fault.
///
/// The message defaults to the fault's `Display` output and the developer
/// details to its `source()` chain. [`FaultError::to_fault`] returns the
/// original fault rather than a new one, so a caller can propagate exactly
/// what the producer caught.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use maybe_error::FaultError;
///
/// let io = std::io::Error::other("disk unplugged");
/// let err = FaultError::new(io);
/// assert_eq!(err.as_error().message(), "disk unplugged");
/// assert!(Arc::ptr_eq(&err.shared_fault(), &err.shared_fault()));
/// ```
pub struct FaultError<F> {
    fault: Arc<F>,
    error: Error,
}

impl<F> FaultError<F>
where
    F: StdError + Send + Sync + 'static,
{
    /// Wraps `fault`, deriving the message and developer details from it.
    #[must_use]
    pub fn new(fault: F) -> Self {
        Self::from_shared(Arc::new(fault))
    }

    /// Wraps `fault` under an explicit message; the fault's own text becomes
    /// the details.
    #[must_use]
    pub fn with_message(message: impl Into<String>, fault: F) -> Self {
        let shared = Arc::new(fault);
        let error = Error::wrapping(
            message.into(),
            Some(shared.to_string()),
            source_chain(&*shared),
            Arc::clone(&shared) as Fault,
        );
        Self {
            fault: shared,
            error,
        }
    }

    /// Wraps an already shared fault.
    #[must_use]
    pub fn from_shared(fault: Arc<F>) -> Self {
        let error = Error::from_shared_fault(Arc::clone(&fault) as Fault);
        Self { fault, error }
    }

    /// The original fault.
    #[must_use]
    pub fn fault(&self) -> &F {
        &self.fault
    }

    /// The original fault, shared.
    #[must_use]
    pub fn shared_fault(&self) -> Arc<F> {
        Arc::clone(&self.fault)
    }

    /// The original fault as an untyped [`Fault`]; same allocation.
    #[must_use]
    pub fn to_fault(&self) -> Fault {
        Arc::clone(&self.fault) as Fault
    }
}

impl<F> FaultError<F> {
    /// The base error view.
    #[must_use]
    pub const fn as_error(&self) -> &Error {
        &self.error
    }

    /// Renders the message followed by the fault's own text.
    #[must_use]
    pub fn render(&self) -> String {
        self.error.render()
    }
}

impl<F> Clone for FaultError<F> {
    fn clone(&self) -> Self {
        Self {
            fault: Arc::clone(&self.fault),
            error: self.error.clone(),
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for FaultError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultError")
            .field("fault", &self.fault)
            .field("message", &self.error.message())
            .field("details", &self.error.details())
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Display for FaultError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<F> PartialEq for FaultError<F> {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl<F> Eq for FaultError<F> {}

impl<F> AsRef<Error> for FaultError<F> {
    fn as_ref(&self) -> &Error {
        &self.error
    }
}

/// Widening keeps the wrapped fault allocation.
impl<F> From<FaultError<F>> for Error {
    fn from(e: FaultError<F>) -> Self {
        e.error
    }
}

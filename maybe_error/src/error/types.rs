//! The base error value carried by outcomes.

use std::{backtrace::Backtrace, fmt, sync::Arc};

use super::fault::{ErrorFault, Fault, source_chain};
use crate::settings::{Diagnostics, Settings};

/// Where an [`Error`] came from.
///
/// Fault materialisation dispatches on this tag: plain errors synthesise a
/// new [`ErrorFault`], wrapped faults hand back the original allocation.
#[derive(Debug, Clone)]
enum Origin {
    Plain,
    Fault(Fault),
}

impl PartialEq for Origin {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Plain, Self::Plain) => true,
            (Self::Fault(lhs), Self::Fault(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl Eq for Origin {}

/// An immutable description of a failure.
///
/// Carries a human-readable message, optional user-facing details and
/// optional developer-only details. Errors are built at the failure site and
/// owned by the outcome that carries them.
///
/// # Examples
///
/// ```
/// use maybe_error::{Diagnostics, Error};
///
/// let err = Error::new("port out of range")
///     .with_details("expected a value between 1 and 65535")
///     .with_diagnostics(Diagnostics::Disabled);
/// assert_eq!(
///     err.render(),
///     "port out of range\nexpected a value between 1 and 65535"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    details: Option<String>,
    dev_details: Option<String>,
    diagnostics: Diagnostics,
    trace: Option<Arc<Backtrace>>,
    origin: Origin,
}

impl Error {
    /// Creates an error using the process-wide diagnostics mode from
    /// [`Settings::global`].
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::plain(message.into(), Settings::global().diagnostics)
    }

    /// Creates an error with an explicit diagnostics mode.
    #[must_use]
    pub fn with_mode(message: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self::plain(message.into(), diagnostics)
    }

    /// Wraps a native fault; the fault is kept for identity-preserving
    /// rethrow.
    ///
    /// The message is the fault's `Display` output and the developer details
    /// list its `source()` chain.
    #[must_use]
    pub fn from_fault<F>(fault: F) -> Self
    where
        F: std::error::Error + Send + Sync + 'static,
    {
        Self::from_shared_fault(Arc::new(fault))
    }

    /// Wraps an already shared fault without reallocating it.
    #[must_use]
    pub fn from_shared_fault(fault: Fault) -> Self {
        let message = fault.to_string();
        let dev_details = source_chain(&*fault);
        Self::wrapping(message, None, dev_details, fault)
    }

    fn plain(message: String, diagnostics: Diagnostics) -> Self {
        Self {
            message,
            details: None,
            dev_details: None,
            diagnostics,
            trace: capture_trace(diagnostics),
            origin: Origin::Plain,
        }
    }

    pub(crate) fn wrapping(
        message: String,
        details: Option<String>,
        dev_details: Option<String>,
        fault: Fault,
    ) -> Self {
        Self {
            message,
            details,
            dev_details,
            diagnostics: Settings::global().diagnostics,
            trace: None,
            origin: Origin::Fault(fault),
        }
    }

    /// Attaches user-facing details.
    ///
    /// Errors wrapping a fault keep the details for [`Error::details`] and
    /// [`Error::record`], but render the fault's text in their place.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attaches developer-only details, rendered only with diagnostics on.
    ///
    /// Not rendered for errors wrapping a fault; see [`Error::with_details`].
    #[must_use]
    pub fn with_dev_details(mut self, dev_details: impl Into<String>) -> Self {
        self.dev_details = Some(dev_details.into());
        self
    }

    /// Overrides the diagnostics mode recorded for this error.
    ///
    /// Enabling diagnostics on a plain error captures a backtrace at this
    /// point if none was captured at construction; disabling drops it.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self.trace = match (&self.origin, diagnostics) {
            (Origin::Plain, Diagnostics::Enabled) => {
                self.trace.take().or_else(|| capture_trace(diagnostics))
            }
            _ => None,
        };
        self
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// User-facing elaboration, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Developer-only details, if any.
    #[must_use]
    pub fn dev_details(&self) -> Option<&str> {
        self.dev_details.as_deref()
    }

    /// Diagnostics mode recorded when the error was built.
    #[must_use]
    pub const fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Backtrace captured at construction when diagnostics were enabled.
    #[must_use]
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_deref()
    }

    /// The wrapped native fault, when this error was built from one.
    #[must_use]
    pub const fn wrapped_fault(&self) -> Option<&Fault> {
        match &self.origin {
            Origin::Fault(fault) => Some(fault),
            Origin::Plain => None,
        }
    }

    /// Renders the error as text for logging sinks.
    ///
    /// Plain errors render as `message\ndetails`; with diagnostics enabled
    /// `\ndev_details\nTrace:backtrace` follows. Every slot is written even
    /// when empty, so each part keeps its line position. Wrapped faults
    /// render as `message` followed by the fault's own `Display` output.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Materialises a native fault for `?`-based propagation.
    ///
    /// Wrapped faults are returned as the same allocation; plain errors
    /// produce a new [`ErrorFault`] whose message is [`Error::render`].
    #[must_use]
    pub fn to_fault(&self) -> Fault {
        match &self.origin {
            Origin::Fault(fault) => Arc::clone(fault),
            Origin::Plain => Arc::new(ErrorFault::new(self.render())),
        }
    }
}

fn capture_trace(diagnostics: Diagnostics) -> Option<Arc<Backtrace>> {
    diagnostics
        .is_enabled()
        .then(|| Arc::new(Backtrace::force_capture()))
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match &self.origin {
            Origin::Fault(fault) => write!(f, "\n{fault}"),
            Origin::Plain => {
                write!(f, "\n{}", self.details().unwrap_or_default())?;
                if !self.diagnostics.is_enabled() {
                    return Ok(());
                }
                write!(f, "\n{}\nTrace:", self.dev_details().unwrap_or_default())?;
                match &self.trace {
                    Some(trace) => write!(f, "{trace}"),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Equality ignores the diagnostics mode and captured backtraces; wrapped
/// faults compare by identity.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.details == other.details
            && self.dev_details == other.dev_details
            && self.origin == other.origin
    }
}

impl Eq for Error {}

impl From<Error> for String {
    fn from(e: Error) -> Self {
        e.render()
    }
}

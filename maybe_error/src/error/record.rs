//! Serialisable snapshots of errors for structured log sinks.

use serde::{Deserialize, Serialize};

use super::types::Error;

/// The data portion of an [`Error`], free of faults and backtraces.
///
/// # Examples
///
/// ```
/// use maybe_error::{Error, ErrorRecord};
///
/// let record = Error::new("quota exceeded").with_details("limit is 10").record();
/// assert_eq!(
///     record,
///     ErrorRecord {
///         message: "quota exceeded".into(),
///         details: Some("limit is 10".into()),
///         dev_details: None,
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable message.
    pub message: String,
    /// User-facing elaboration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Developer-only details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_details: Option<String>,
}

impl Error {
    /// Snapshots the message and details.
    #[must_use]
    pub fn record(&self) -> ErrorRecord {
        ErrorRecord {
            message: self.message().to_owned(),
            details: self.details().map(str::to_owned),
            dev_details: self.dev_details().map(str::to_owned),
        }
    }
}

impl From<&Error> for ErrorRecord {
    fn from(e: &Error) -> Self {
        e.record()
    }
}

/// Rebuilds a plain error under the process-wide diagnostics mode.
impl From<ErrorRecord> for Error {
    fn from(record: ErrorRecord) -> Self {
        let ErrorRecord {
            message,
            details,
            dev_details,
        } = record;
        let base = Self::new(message);
        let detailed = match details {
            Some(text) => base.with_details(text),
            None => base,
        };
        match dev_details {
            Some(text) => detailed.with_dev_details(text),
            None => detailed,
        }
    }
}

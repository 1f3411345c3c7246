//! Explicit value-or-error outcomes with a structured error model.
//!
//! A producer returns a [`Maybe`] holding either the value it computed or an
//! [`Error`] describing why it could not. The caller decides per call site
//! whether to narrow by matching, to substitute a fallback through the
//! [`Project`] operations, or to turn the error back into a [`Fault`] and
//! propagate it with `?`.
//!
//! ```
//! use maybe_error::{Error, Fault, Maybe, Project};
//!
//! fn find_user(id: u32) -> Maybe<String> {
//!     if id == 1 {
//!         Maybe::ok("ada".to_owned())
//!     } else {
//!         Error::new("user not found").with_details(format!("id {id}")).into()
//!     }
//! }
//!
//! fn greeting(id: u32) -> Result<String, Fault> {
//!     let name = find_user(id).into_value()?;
//!     Ok(format!("hello, {name}"))
//! }
//!
//! assert_eq!(greeting(1).ok().as_deref(), Some("hello, ada"));
//! assert!(greeting(2).is_err());
//! assert_eq!(find_user(2).project_or(|name| name.len(), 0), 0);
//! ```
//!
//! Errors that wrap a native fault keep it: [`Error::to_fault`] hands back
//! the original allocation, so downcasting the propagated fault recovers the
//! producer's own error type. Developer details and backtraces are rendered
//! only when [`Diagnostics`] are enabled; see [`Settings`].

mod error;
mod future;
mod maybe;
mod outcome;
mod projection;
mod settings;

pub use error::{AnyFaultError, AsError, Error, ErrorFault, ErrorRecord, Fault, FaultError};
pub use future::OutcomeFuture;
pub use maybe::{Maybe, MaybeEx, ValueMaybe, ValueMaybeEx};
pub use outcome::Outcome;
pub use projection::Project;
pub use settings::{ConfigError, Diagnostics, ENV_PREFIX, Settings};

/// Traits needed to call the outcome operations, for glob import.
pub mod prelude {
    pub use crate::{AsError, Outcome, OutcomeFuture, Project};
}

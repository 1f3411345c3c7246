//! The error model carried by outcomes.

mod fault;
mod record;
mod traits;
mod types;

pub use fault::{AnyFaultError, ErrorFault, Fault, FaultError};
pub use record::ErrorRecord;
pub use traits::AsError;
pub use types::Error;

//! Sample native faults and identity assertions for outcome tests.

use std::{io, sync::Arc};

use thiserror::Error;

/// Stand-in for an operation attempted in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation is not valid due to the current state")]
pub struct InvalidOperation;

/// Fault with a `source()` chain two causes deep.
#[derive(Debug, Error)]
#[error("request to {endpoint} failed")]
pub struct RequestFailed {
    /// Endpoint that was being called.
    pub endpoint: String,
    /// Underlying transport failure.
    #[source]
    pub source: TransportFailed,
}

/// Middle link of the [`RequestFailed`] chain.
#[derive(Debug, Error)]
#[error("transport closed")]
pub struct TransportFailed {
    /// Root I/O cause.
    #[source]
    pub source: io::Error,
}

/// Builds a [`RequestFailed`] whose chain ends in a reset connection.
#[must_use]
pub fn request_failed(endpoint: &str) -> RequestFailed {
    RequestFailed {
        endpoint: endpoint.to_owned(),
        source: TransportFailed {
            source: io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
        },
    }
}

/// Returns `true` when both handles point at the same allocation, whatever
/// their static types.
#[must_use]
pub fn same_allocation<A: ?Sized, B: ?Sized>(lhs: &Arc<A>, rhs: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(lhs), Arc::as_ptr(rhs))
}

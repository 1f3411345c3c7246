//! Projection operations applied to outcomes that are still being computed.
//!
//! Each adapter awaits the wrapped future exactly once and then runs the
//! matching [`Project`] operation on the resolved outcome. Nothing is
//! spawned and no state is added: dropping the returned future cancels the
//! inner one, and a panic in the inner computation unwinds through the
//! `.await` untouched. Computations that report their own failure (such as
//! a task join handle) should map that failure before adapting.
//!
//! # Examples
//!
//! ```
//! use maybe_error::{Error, Maybe, OutcomeFuture};
//!
//! async fn lookup(id: u32) -> Maybe<String> {
//!     if id == 7 {
//!         Maybe::ok("seven".to_owned())
//!     } else {
//!         Error::new("unknown id").into()
//!     }
//! }
//!
//! # async fn demo() {
//! assert_eq!(lookup(7).project_or(|name| name.len(), 0).await, 5);
//! assert_eq!(lookup(8).value_or_none().await, None);
//! # }
//! ```

use std::future::Future;

use crate::{error::Fault, outcome::Outcome, projection::Project};

/// A future resolving to an [`Outcome`] `O`.
///
/// Implemented for every such future; the methods mirror [`Project`].
pub trait OutcomeFuture<O: Outcome>: Future<Output = O> + Sized {
    /// Awaits the outcome, then [`Project::value_or`].
    fn value_or(self, fallback: O::Value) -> impl Future<Output = O::Value> {
        async move { Project::value_or(self.await, fallback) }
    }

    /// Awaits the outcome, then [`Project::value_or_none`].
    fn value_or_none(self) -> impl Future<Output = Option<O::Value>> {
        async move { Project::value_or_none(self.await) }
    }

    /// Awaits the outcome, then [`Project::value_or_default`].
    fn value_or_default(self) -> impl Future<Output = O::Value>
    where
        O::Value: Default,
    {
        async move { Project::value_or_default(self.await) }
    }

    /// Awaits the outcome, then [`Project::project`].
    ///
    /// The returned future resolves to the carried error's [`Fault`] for
    /// error outcomes.
    fn project<R, P>(self, project: P) -> impl Future<Output = Result<R, Fault>>
    where
        P: FnOnce(O::Value) -> R,
    {
        async move { Project::project(self.await, project) }
    }

    /// Awaits the outcome, then [`Project::project_or_none`].
    fn project_or_none<R, P>(self, project: P) -> impl Future<Output = Option<R>>
    where
        P: FnOnce(O::Value) -> R,
    {
        async move { Project::project_or_none(self.await, project) }
    }

    /// Awaits the outcome, then [`Project::project_or`].
    fn project_or<R, P>(self, project: P, fallback: R) -> impl Future<Output = R>
    where
        P: FnOnce(O::Value) -> R,
    {
        async move { Project::project_or(self.await, project, fallback) }
    }

    /// Awaits the outcome, then [`Project::project_or_default`].
    fn project_or_default<R, P>(self, project: P) -> impl Future<Output = R>
    where
        R: Default,
        P: FnOnce(O::Value) -> R,
    {
        async move { Project::project_or_default(self.await, project) }
    }
}

impl<F, O> OutcomeFuture<O> for F
where
    F: Future<Output = O>,
    O: Outcome,
{
}

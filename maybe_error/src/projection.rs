//! Projection and extraction operations shared by every outcome form.
//!
//! [`Project`] is implemented once, for anything that is an [`Outcome`]:
//! [`Maybe`](crate::Maybe) and `Result<T, E>` over this crate's errors alike.
//! Two policies are offered per call site:
//!
//! - [`Project::project`] propagates the error as a [`Fault`], like
//!   [`Maybe::value`](crate::Maybe::value).
//! - The `*_or*` family never fails; it substitutes `None`, a fallback or
//!   the type's default.
//!
//! # Examples
//!
//! ```
//! use maybe_error::{Error, Maybe, Project};
//!
//! let name: Maybe<String> = Maybe::ok("Test".into());
//! assert_eq!(name.clone().project_or(|v| v.len(), 0), 4);
//!
//! let missing: Maybe<String> = Error::new("no such user").into();
//! assert_eq!(missing.clone().project_or_none(|v| v.len()), None);
//! assert!(missing.project(|v| v.len()).is_err());
//! ```

use crate::{
    error::Fault,
    outcome::{Outcome, raise},
};

/// Value extraction and projection over any [`Outcome`].
pub trait Project: Outcome {
    /// The value, or `fallback` for error outcomes.
    fn value_or(self, fallback: Self::Value) -> Self::Value {
        self.into_parts().unwrap_or(fallback)
    }

    /// The value, or `None` for error outcomes.
    fn value_or_none(self) -> Option<Self::Value> {
        self.into_parts().ok()
    }

    /// The value, or the payload type's default for error outcomes.
    fn value_or_default(self) -> Self::Value
    where
        Self::Value: Default,
    {
        self.into_parts().unwrap_or_default()
    }

    /// Applies `project` to the value.
    ///
    /// # Errors
    ///
    /// Returns the carried error's [`Fault`] for error outcomes; `project`
    /// is not called.
    fn project<R, P>(self, project: P) -> Result<R, Fault>
    where
        P: FnOnce(Self::Value) -> R,
    {
        self.into_parts().map(project).map_err(|error| raise(&error))
    }

    /// Applies `project` to the value, or yields `None` for error outcomes.
    fn project_or_none<R, P>(self, project: P) -> Option<R>
    where
        P: FnOnce(Self::Value) -> R,
    {
        self.into_parts().ok().map(project)
    }

    /// Applies `project` to the value, or yields `fallback` for error
    /// outcomes.
    fn project_or<R, P>(self, project: P, fallback: R) -> R
    where
        P: FnOnce(Self::Value) -> R,
    {
        self.into_parts().map_or(fallback, project)
    }

    /// Applies `project` to the value, or yields `R::default()` for error
    /// outcomes.
    fn project_or_default<R, P>(self, project: P) -> R
    where
        R: Default,
        P: FnOnce(Self::Value) -> R,
    {
        self.into_parts().map_or_else(|_| R::default(), project)
    }
}

impl<O: Outcome> Project for O {}

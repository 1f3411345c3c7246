//! Runs environment-dependent assertions inside a `figment::Jail`.
//!
//! The jail serialises access to the process environment and restores it on
//! exit, so settings tests can set `MAYBE_ERROR_*` variables without racing
//! each other.

use anyhow::{Result, anyhow};

/// Runs `f` in a jail with each `(name, value)` pair exported first.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or `f` fails; figment's
/// error is flattened into its message.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        for (name, value) in vars {
            jail.set_env(name, value);
        }
        output = Some(f()?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure produced no output"))
}

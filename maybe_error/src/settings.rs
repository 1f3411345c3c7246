//! Runtime settings controlling how errors capture and render diagnostics.
//!
//! Diagnostic output (developer details and captured backtraces) is governed
//! by a runtime flag rather than a compile-time switch, so the [`Error`]
//! type keeps a single shape across debug and release builds. The flag is
//! read once from the environment through Figment and can be overridden per
//! error with [`Error::with_diagnostics`].
//!
//! [`Error`]: crate::Error
//! [`Error::with_diagnostics`]: crate::Error::with_diagnostics

use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix shared by every environment variable read by [`Settings::from_env`].
pub const ENV_PREFIX: &str = "MAYBE_ERROR_";

static GLOBAL: LazyLock<Settings> = LazyLock::new(load_or_default);

/// Loads settings from the environment, logging and replacing failures with
/// the defaults.
fn load_or_default() -> Settings {
    Settings::from_env().unwrap_or_else(|err| {
        tracing::warn!(
            error = %err,
            prefix = ENV_PREFIX,
            "failed to load maybe_error settings; falling back to defaults"
        );
        Settings::default()
    })
}

/// Whether errors capture and render developer-only diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "DiagnosticsRepr")]
pub enum Diagnostics {
    /// Render only the message and user-facing details.
    Disabled,
    /// Also render developer details and capture a backtrace on construction.
    Enabled,
}

impl Diagnostics {
    /// Mode used when nothing is configured: enabled in debug builds only.
    #[must_use]
    pub const fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// Returns `true` for [`Diagnostics::Enabled`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::build_default()
    }
}

impl From<bool> for Diagnostics {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

const ACCEPTED_MODES: &str = "enabled, disabled, on, off, true, false, 1 or 0";

/// Accepted spellings for [`Diagnostics`]: a boolean, `0`/`1` or a named
/// switch.
#[derive(Deserialize)]
#[serde(untagged)]
enum DiagnosticsRepr {
    Flag(bool),
    Number(i64),
    Named(String),
}

impl TryFrom<DiagnosticsRepr> for Diagnostics {
    type Error = String;

    fn try_from(repr: DiagnosticsRepr) -> Result<Self, Self::Error> {
        match repr {
            DiagnosticsRepr::Flag(enabled) => Ok(Self::from(enabled)),
            DiagnosticsRepr::Number(1) => Ok(Self::Enabled),
            DiagnosticsRepr::Number(0) => Ok(Self::Disabled),
            DiagnosticsRepr::Number(other) => Err(format!(
                "unknown diagnostics mode '{other}', expected {ACCEPTED_MODES}"
            )),
            DiagnosticsRepr::Named(name) => match name.trim().to_ascii_lowercase().as_str() {
                "enabled" | "on" | "true" | "1" => Ok(Self::Enabled),
                "disabled" | "off" | "false" | "0" => Ok(Self::Disabled),
                _ => Err(format!(
                    "unknown diagnostics mode '{name}', expected {ACCEPTED_MODES}"
                )),
            },
        }
    }
}

/// Process-wide settings for the outcome types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Diagnostics mode applied to errors built with [`Error::new`].
    ///
    /// [`Error::new`]: crate::Error::new
    pub diagnostics: Diagnostics,
}

impl Settings {
    /// Loads settings from `MAYBE_ERROR_*` environment variables layered
    /// over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a variable holds a value that does
    /// not deserialise into the expected type.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(&Figment::new().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extracts settings from an arbitrary figment, applying the defaults
    /// underneath it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(figment.clone())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Settings loaded from the environment on first use.
    ///
    /// Load failures are logged and replaced by [`Settings::default`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

/// Errors raised while loading [`Settings`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configuration source could not be extracted.
    #[error("failed to load maybe_error settings: {0}")]
    Load(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Load(Box::new(e))
    }
}

impl From<ConfigError> for figment::Error {
    /// Allow using `?` inside `figment::Jail` closures.
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Load(source) => *source,
        }
    }
}

#[cfg(test)]
mod tests {
    use figment::{Figment, providers::Serialized};
    use rstest::rstest;
    use test_helpers::jail::with_env;

    use super::{ConfigError, Diagnostics, Settings, load_or_default};

    #[rstest]
    #[case(true, Diagnostics::Enabled)]
    #[case(false, Diagnostics::Disabled)]
    fn booleans_select_mode(#[case] flag: bool, #[case] expected: Diagnostics) {
        let figment = Figment::from(Serialized::default("diagnostics", flag));
        let settings = Settings::from_figment(&figment).expect("settings should extract");
        assert_eq!(settings.diagnostics, expected);
    }

    #[rstest]
    #[case("enabled", Diagnostics::Enabled)]
    #[case("OFF", Diagnostics::Disabled)]
    #[case(" on ", Diagnostics::Enabled)]
    fn names_select_mode(#[case] name: &str, #[case] expected: Diagnostics) {
        let figment = Figment::from(Serialized::default("diagnostics", name));
        let settings = Settings::from_figment(&figment).expect("settings should extract");
        assert_eq!(settings.diagnostics, expected);
    }

    #[rstest]
    #[case(1, Diagnostics::Enabled)]
    #[case(0, Diagnostics::Disabled)]
    fn numeric_switches_select_mode(#[case] flag: i64, #[case] expected: Diagnostics) {
        let figment = Figment::from(Serialized::default("diagnostics", flag));
        let settings = Settings::from_figment(&figment).expect("settings should extract");
        assert_eq!(settings.diagnostics, expected);
    }

    #[test]
    fn other_numbers_name_the_accepted_spellings() {
        let figment = Figment::from(Serialized::default("diagnostics", 2));
        let err = Settings::from_figment(&figment).expect_err("mode should be rejected");
        let text = err.to_string();
        assert!(text.contains("'2'"), "missing rejected value in {text}");
        assert!(text.contains("1 or 0"), "missing accepted spellings in {text}");
    }

    #[test]
    fn load_failure_falls_back_to_defaults() {
        let settings = with_env(&[("MAYBE_ERROR_DIAGNOSTICS", "verbose")], || {
            Ok(load_or_default())
        })
        .expect("jail should run");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn successful_load_is_kept() {
        let settings = with_env(&[("MAYBE_ERROR_DIAGNOSTICS", "off")], || {
            Ok(load_or_default())
        })
        .expect("jail should run");
        assert_eq!(settings.diagnostics, Diagnostics::Disabled);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let figment = Figment::from(Serialized::default("diagnostics", "verbose"));
        let err = Settings::from_figment(&figment).expect_err("mode should be rejected");
        assert!(matches!(err, ConfigError::Load(_)));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn empty_figment_uses_build_default() {
        let settings = Settings::from_figment(&Figment::new()).expect("defaults should extract");
        assert_eq!(settings.diagnostics, Diagnostics::build_default());
    }
}

//! Hook composition settings
//!
//! Settings are read once (usually from the process environment) and then
//! passed explicitly into every composition call.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable selecting the rollback mode
pub const ROLLBACK_ENV: &str = "ROLLBACK";

/// Environment variable enabling a pause step when a test fails
pub const ENABLE_PAUSE_ENV: &str = "ENABLE_PAUSE";

/// When synthesized rollback actions are added to a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollbackMode {
    /// No rollback actions
    #[default]
    Disabled,
    /// Roll back media and database after every test
    PerTest,
    /// Roll back media and database only when a test fails
    OnFailure,
}

impl RollbackMode {
    /// Interpret the raw value of the `ROLLBACK` environment variable
    ///
    /// Only the exact values `PER_TEST` and `ON_FAILURE` enable rollback.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("PER_TEST") => Self::PerTest,
            Some("ON_FAILURE") => Self::OnFailure,
            Some(other) => {
                tracing::debug!(
                    value = %other,
                    "Unrecognized {ROLLBACK_ENV} value, rollback disabled"
                );
                Self::Disabled
            }
            None => Self::Disabled,
        }
    }
}

/// Settings that condition hook composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HookSettings {
    /// Rollback mode
    #[serde(default)]
    pub rollback: RollbackMode,

    /// Add a pause step to the failure hook
    #[serde(default)]
    pub enable_pause: bool,
}

impl HookSettings {
    /// Read settings from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through a variable lookup function
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let settings = HookSettings::from_lookup(|name| match name {
    ///     "ROLLBACK" => Some("PER_TEST".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(settings.rollback, RollbackMode::PerTest);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let rollback = RollbackMode::from_env_value(lookup(ROLLBACK_ENV).as_deref());
        let enable_pause = lookup(ENABLE_PAUSE_ENV).as_deref() == Some("true");

        tracing::debug!(?rollback, enable_pause, "Loaded hook settings");

        Self {
            rollback,
            enable_pause,
        }
    }

    /// Parse settings from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has invalid values
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid hook settings: {e}")))
    }

    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Invalid hook settings in {}: {e}", path.display()))
        })
    }

    /// Every after hook rolls back state
    #[must_use]
    pub fn rollback_per_test(&self) -> bool {
        self.rollback == RollbackMode::PerTest
    }

    /// The failure hook rolls back state
    #[must_use]
    pub fn rollback_on_failure(&self) -> bool {
        self.rollback == RollbackMode::OnFailure
    }
}

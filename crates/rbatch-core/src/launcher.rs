//! Turn an action into a templated user unit and ask the service manager to
//! start it.
//!
//! Two one-shot steps, in order:
//! 1. `<escape_program> --template <template> <action>` → unit name
//! 2. `<control_program> --user start <unit name>`
//!
//! The first failure aborts the run. Nothing is retried.

use std::fmt;

use crate::action::Action;
use crate::config::LaunchConfig;
use crate::error::{LaunchError, Result};
use crate::runner::{CommandRunner, SystemRunner};

/// Instance-qualified unit name produced by the escaping utility. Passed on
/// to the service-control utility verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitName(String);

impl UnitName {
    fn from_escape_output(stdout: &str) -> Self {
        Self(stdout.trim_end().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct Launcher<R = SystemRunner> {
    config: LaunchConfig,
    runner: R,
}

impl Launcher<SystemRunner> {
    pub fn new(config: LaunchConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Launcher<R> {
    pub fn with_runner(config: LaunchConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Ask the escaping utility for the unit name of `action`.
    pub fn escape(&self, action: &Action) -> Result<UnitName> {
        let args = ["--template", self.config.template.as_str(), action.as_str()];
        let stdout = self
            .runner
            .capture(&self.config.escape_program, &args)
            .map_err(|e| {
                tracing::warn!(action = %action, error = %e, "escape failed");
                LaunchError::Escape(e)
            })?;

        let unit = UnitName::from_escape_output(&stdout);
        tracing::debug!(action = %action, unit = %unit, "escaped");
        Ok(unit)
    }

    /// Request a start of `unit` in the invoking user's service manager.
    pub fn start(&self, unit: &UnitName) -> Result<()> {
        let args = ["--user", "start", unit.as_str()];
        self.runner
            .run(&self.config.control_program, &args)
            .map_err(|e| {
                tracing::warn!(unit = %unit, error = %e, "start failed");
                LaunchError::Start(e)
            })?;

        tracing::info!(unit = %unit, "start requested");
        Ok(())
    }

    /// Escape `action` and start the resulting unit. Returns the unit name.
    pub fn launch(&self, action: &Action) -> Result<UnitName> {
        self.config.validate()?;
        let unit = self.escape(action)?;
        self.start(&unit)?;
        Ok(unit)
    }
}

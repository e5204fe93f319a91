use crate::error::{LaunchError, Result};

pub const DEFAULT_TEMPLATE: &str = "rbatch@.service";
pub const DEFAULT_ESCAPE_PROGRAM: &str = "systemd-escape";
pub const DEFAULT_CONTROL_PROGRAM: &str = "systemctl";

/// Which template to instantiate and which utilities to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Template unit passed to the escaping utility, e.g. `rbatch@.service`.
    pub template: String,
    /// Escaping utility (`systemd-escape`).
    pub escape_program: String,
    /// Service-control utility (`systemctl`). Always invoked with `--user`.
    pub control_program: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            escape_program: DEFAULT_ESCAPE_PROGRAM.to_string(),
            control_program: DEFAULT_CONTROL_PROGRAM.to_string(),
        }
    }
}

impl LaunchConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("template", &self.template),
            ("escape program", &self.escape_program),
            ("control program", &self.control_program),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(LaunchError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_rbatch_user_units() {
        let config = LaunchConfig::default();
        assert_eq!(config.template, "rbatch@.service");
        assert_eq!(config.escape_program, "systemd-escape");
        assert_eq!(config.control_program, "systemctl");
        config.validate().unwrap();
    }

    #[test]
    fn blank_template_is_rejected() {
        let config = LaunchConfig {
            template: "  ".into(),
            ..LaunchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid launch configuration: template must not be empty"
        );
    }

    #[test]
    fn empty_program_is_rejected() {
        let config = LaunchConfig {
            control_program: String::new(),
            ..LaunchConfig::default()
        };
        assert!(matches!(config.validate(), Err(LaunchError::Config(_))));
    }
}

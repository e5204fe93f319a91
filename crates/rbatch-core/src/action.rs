//! Resolve which instance of the templated unit this invocation targets.
//!
//! The launcher is installed under several names (symlinks to one binary);
//! the name it was started as is the action. An explicitly supplied action
//! overrides the program name.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::{LaunchError, Result};

/// A non-empty instance identifier for the templated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action(String);

impl Action {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(LaunchError::Resolution("action name is empty".into()));
        }
        Ok(Self(raw))
    }

    /// Derive the action from the invocation name (`argv[0]`), keeping only
    /// its final path component.
    pub fn from_program_name(argv0: Option<&OsStr>) -> Result<Self> {
        let argv0 = argv0.ok_or_else(|| {
            LaunchError::Resolution("program name (argv[0]) is not available".into())
        })?;
        let name = Path::new(argv0).file_name().ok_or_else(|| {
            LaunchError::Resolution(format!(
                "program name {:?} has no file name component",
                argv0
            ))
        })?;
        let name = name.to_str().ok_or_else(|| {
            LaunchError::Resolution(format!("program name {:?} is not valid UTF-8", name))
        })?;
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the action for this run.
///
/// Priority:
/// 1. `explicit` (`--action` flag / `RBATCH_ACTION`); an empty value is an
///    error, not a fallback
/// 2. The program name the process was invoked as
pub fn resolve_action(explicit: Option<&str>, argv0: Option<&OsStr>) -> Result<Action> {
    match explicit {
        Some(a) => Action::new(a),
        None => Action::from_program_name(argv0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_uses_basename() {
        let action = Action::from_program_name(Some(OsStr::new("/usr/bin/foo"))).unwrap();
        assert_eq!(action.as_str(), "foo");
    }

    #[test]
    fn bare_program_name_is_kept_verbatim() {
        let action = Action::from_program_name(Some(OsStr::new("nightly-report"))).unwrap();
        assert_eq!(action.to_string(), "nightly-report");
    }

    #[test]
    fn missing_program_name_fails() {
        let err = Action::from_program_name(None).unwrap_err();
        assert!(matches!(err, LaunchError::Resolution(_)));
    }

    #[test]
    fn empty_program_name_fails() {
        let err = Action::from_program_name(Some(OsStr::new(""))).unwrap_err();
        assert!(matches!(err, LaunchError::Resolution(_)));
    }

    #[test]
    fn root_path_has_no_action() {
        let err = Action::from_program_name(Some(OsStr::new("/"))).unwrap_err();
        assert!(matches!(err, LaunchError::Resolution(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_program_name_fails() {
        use std::os::unix::ffi::OsStrExt;
        let name = OsStr::from_bytes(b"/usr/bin/\xff\xfe");
        let err = Action::from_program_name(Some(name)).unwrap_err();
        assert!(matches!(err, LaunchError::Resolution(_)));
    }

    #[test]
    fn explicit_action_wins_over_program_name() {
        let action = resolve_action(Some("bar"), Some(OsStr::new("/usr/bin/foo"))).unwrap();
        assert_eq!(action.as_str(), "bar");
    }

    #[test]
    fn explicit_empty_action_does_not_fall_back() {
        let err = resolve_action(Some(""), Some(OsStr::new("foo"))).unwrap_err();
        assert!(matches!(err, LaunchError::Resolution(_)));
    }

    #[test]
    fn program_name_used_without_explicit_action() {
        let action = resolve_action(None, Some(OsStr::new("./foo"))).unwrap();
        assert_eq!(action.as_str(), "foo");
    }
}

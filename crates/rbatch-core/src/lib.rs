pub mod action;
pub mod config;
pub mod error;
pub mod launcher;
pub mod runner;

pub use action::{resolve_action, Action};
pub use config::LaunchConfig;
pub use error::{LaunchError, Result, ToolFailure};
pub use launcher::{Launcher, UnitName};

use thiserror::Error;

/// Why an external utility could not do its job.
#[derive(Debug, Error)]
pub enum ToolFailure {
    #[error("'{program}' not found or not executable")]
    NotFound { program: String },

    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}", describe_code(.code))]
    Exited { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ToolFailure {
    /// Exit status the launcher should report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolFailure::NotFound { .. } => 127,
            ToolFailure::Spawn { .. } => 126,
            ToolFailure::Exited { code: Some(c), .. } if *c != 0 => *c,
            ToolFailure::Exited { .. } => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot resolve action: {0}")]
    Resolution(String),

    #[error("invalid launch configuration: {0}")]
    Config(String),

    #[error("escaping unit name failed")]
    Escape(#[source] ToolFailure),

    #[error("starting unit failed")]
    Start(#[source] ToolFailure),
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Resolution(_) | LaunchError::Config(_) => 2,
            LaunchError::Escape(f) | LaunchError::Start(f) => f.exit_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;

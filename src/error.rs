use std::process::ExitStatus;
use thiserror::Error;

/// Unified error type for tool-util operations
#[derive(Error, Debug)]
pub enum ToolUtilError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid module spec: {0}")]
    ModuleSpec(String),

    #[error("Process '{program}' failed: {status}")]
    Process { program: String, status: ExitStatus },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in tool-util
pub type Result<T> = std::result::Result<T, ToolUtilError>;

impl ToolUtilError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ToolUtilError::Config(msg.into())
    }

    /// Create a module spec error with context
    pub fn module_spec(msg: impl Into<String>) -> Self {
        ToolUtilError::ModuleSpec(msg.into())
    }

    /// Create a child-process failure from its termination status
    pub fn process(program: impl Into<String>, status: ExitStatus) -> Self {
        ToolUtilError::Process {
            program: program.into(),
            status,
        }
    }
}
